//! Removal of translation entries that no call site produces anymore.
//!
//! Synchronization only ever adds keys, so renamed or deleted call sites leave
//! their entries behind. Pruning compares each existing translation file with a
//! full extraction and removes what is not expected there.

use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::{TranslationFile, expected_entries, translation_file_path};
use crate::core::{ExtractionResult, SyncError, keys::DEFAULT_CONTEXT, plurals::PluralRules};

#[derive(Debug)]
pub enum PruneOutcome {
    /// Stale entries were removed and the file was rewritten.
    Pruned { removed: Vec<String> },
    /// Dry run: these entries would be removed.
    WouldPrune { removed: Vec<String> },
    /// Nothing stale in this file.
    Clean,
    Failed(SyncError),
}

impl PruneOutcome {
    pub fn removed(&self) -> &[String] {
        match self {
            PruneOutcome::Pruned { removed } | PruneOutcome::WouldPrune { removed } => removed,
            PruneOutcome::Clean | PruneOutcome::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PruneOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct FilePruneReport {
    pub path: PathBuf,
    pub language: String,
    pub context: String,
    pub outcome: PruneOutcome,
}

pub struct Pruner<'a> {
    translations_root: &'a Path,
    languages: &'a [String],
    plurals: &'a dyn PluralRules,
    apply: bool,
    contexts: bool,
}

impl<'a> Pruner<'a> {
    /// Create a pruner. Without [`Pruner::apply`] it only reports.
    pub fn new(
        translations_root: &'a Path,
        languages: &'a [String],
        plurals: &'a dyn PluralRules,
    ) -> Self {
        Self {
            translations_root,
            languages,
            plurals,
            apply: false,
            contexts: false,
        }
    }

    pub fn apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    /// Also visit context subdirectories found on disk, so a context whose
    /// last call site is gone still gets pruned.
    pub fn contexts(mut self, contexts: bool) -> Self {
        self.contexts = contexts;
        self
    }

    /// Prune every existing translation file of the default context, of every
    /// context present in `keys` and, with [`Pruner::contexts`], of every
    /// context directory under the translations root.
    ///
    /// `keys` must come from a full extraction; files that do not exist are skipped.
    pub fn prune(&self, keys: &ExtractionResult) -> Vec<FilePruneReport> {
        let mut contexts: BTreeSet<String> = keys
            .contexts()
            .map(|(context, _)| context.to_string())
            .chain([DEFAULT_CONTEXT.to_string()])
            .collect();
        if self.contexts {
            contexts.extend(self.context_dirs());
        }

        let mut reports = Vec::new();
        for context in &contexts {
            for lang in self.languages {
                let path = translation_file_path(self.translations_root, context, lang);
                if !path.exists() {
                    continue;
                }
                let expected = self.expected_for(keys, context, lang);
                let outcome = match self.prune_file(&path, &expected) {
                    Ok(outcome) => outcome,
                    Err(err) => PruneOutcome::Failed(err),
                };
                reports.push(FilePruneReport {
                    path,
                    language: lang.clone(),
                    context: context.clone(),
                    outcome,
                });
            }
        }
        reports
    }

    /// Names of the subdirectories of the translations root.
    fn context_dirs(&self) -> Vec<String> {
        WalkDir::new(self.translations_root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect()
    }

    fn expected_for(&self, keys: &ExtractionResult, context: &str, lang: &str) -> HashSet<String> {
        let categories = self.plurals.categories_for(lang);
        keys.context_keys(context)
            .into_iter()
            .flatten()
            .flat_map(|(key, metadata)| expected_entries(key, metadata, &categories))
            .collect()
    }

    fn prune_file(&self, path: &Path, expected: &HashSet<String>) -> Result<PruneOutcome, SyncError> {
        let mut file = TranslationFile::open(path)?;

        let mut removed: Vec<String> = file
            .keys()
            .filter(|key| !expected.contains(*key))
            .map(str::to_string)
            .collect();
        removed.sort();

        if removed.is_empty() {
            return Ok(PruneOutcome::Clean);
        }
        if !self.apply {
            return Ok(PruneOutcome::WouldPrune { removed });
        }

        for key in &removed {
            file.remove_key(key);
        }
        file.save()?;
        Ok(PruneOutcome::Pruned { removed })
    }
}
