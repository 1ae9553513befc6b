use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::TranslationFile;
use crate::core::{
    ExtractionResult, KeyMetadata, SyncError,
    keys::{ContextKeys, DEFAULT_CONTEXT},
    plurals::PluralRules,
};

/// Path of the translation file for a (context, language) pair.
///
/// `<root>/<lang>.json` for the default context, `<root>/<context>/<lang>.json` otherwise.
pub fn translation_file_path(translations_root: &Path, context: &str, lang: &str) -> PathBuf {
    let file_name = format!("{}.json", lang);
    if context == DEFAULT_CONTEXT {
        translations_root.join(file_name)
    } else {
        translations_root.join(context).join(file_name)
    }
}

/// Entries a key occupies in a language's file: `key` for plain keys,
/// `key_<category>` for each plural category otherwise.
pub fn expected_entries(key: &str, metadata: &KeyMetadata, categories: &[String]) -> Vec<String> {
    if metadata.plural {
        categories
            .iter()
            .map(|category| format!("{}_{}", key, category))
            .collect()
    } else {
        vec![key.to_string()]
    }
}

#[derive(Debug)]
pub enum SyncOutcome {
    /// Missing keys were added and the file was rewritten.
    Updated { added: usize },
    /// Dry run: the file is missing `added` keys and would be rewritten.
    WouldUpdate { added: usize },
    /// Every key was already present; the file was not touched.
    Unchanged,
    /// The file could not be read, parsed or written.
    Failed(SyncError),
}

impl SyncOutcome {
    pub fn added(&self) -> usize {
        match self {
            SyncOutcome::Updated { added } | SyncOutcome::WouldUpdate { added } => *added,
            SyncOutcome::Unchanged | SyncOutcome::Failed(_) => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SyncOutcome::Failed(_))
    }
}

/// Result of synchronizing one translation file.
#[derive(Debug)]
pub struct FileSyncReport {
    pub path: PathBuf,
    pub language: String,
    pub context: String,
    pub outcome: SyncOutcome,
}

/// Adds missing keys to the translation files of every configured language.
pub struct Synchronizer<'a> {
    translations_root: &'a Path,
    languages: &'a [String],
    plurals: &'a dyn PluralRules,
    dry_run: bool,
}

impl<'a> Synchronizer<'a> {
    pub fn new(
        translations_root: &'a Path,
        languages: &'a [String],
        plurals: &'a dyn PluralRules,
    ) -> Self {
        Self {
            translations_root,
            languages,
            plurals,
            dry_run: false,
        }
    }

    /// Report what would change without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Synchronize every (context, language) file that `keys` touches.
    ///
    /// A failure on one file is recorded in its report and does not stop the others.
    pub fn sync(&self, keys: &ExtractionResult) -> Vec<FileSyncReport> {
        let categories: HashMap<&str, Vec<String>> = self
            .languages
            .iter()
            .map(|lang| (lang.as_str(), self.plurals.categories_for(lang)))
            .collect();

        let mut reports = Vec::new();
        for (context, context_keys) in keys.contexts() {
            for lang in self.languages {
                let path = translation_file_path(self.translations_root, context, lang);
                let lang_categories = categories.get(lang.as_str()).map_or(&[][..], Vec::as_slice);
                let outcome = match self.sync_file(&path, context_keys, lang_categories) {
                    Ok(outcome) => outcome,
                    Err(err) => SyncOutcome::Failed(err),
                };
                reports.push(FileSyncReport {
                    path,
                    language: lang.clone(),
                    context: context.to_string(),
                    outcome,
                });
            }
        }
        reports
    }

    fn sync_file(
        &self,
        path: &Path,
        keys: &ContextKeys,
        categories: &[String],
    ) -> Result<SyncOutcome, SyncError> {
        let mut file = TranslationFile::open(path)?;

        let mut added = 0;
        for (key, metadata) in keys {
            for entry in expected_entries(key, metadata, categories) {
                if file.ensure_key(&entry) {
                    added += 1;
                }
            }
        }

        if added == 0 {
            return Ok(SyncOutcome::Unchanged);
        }
        if self.dry_run {
            return Ok(SyncOutcome::WouldUpdate { added });
        }

        file.save()?;
        Ok(SyncOutcome::Updated { added })
    }
}
