//! Build-tool hooks: a full run at build start and an incremental run per changed file.
//!
//! [`TranslationExtractor`] ties the pipeline together:
//!
//! 1. **Walk** the source root for `.js/.jsx/.ts/.tsx` files
//! 2. **Extract** keys from each file
//! 3. **Merge** the per-file results
//! 4. **Synchronize** every (context, language) translation file
//!
//! Source errors are collected for every file and stop the run before any
//! translation file is touched: a file that failed to parse may hide keys, and
//! writing the rest would make the gap easy to miss.
//!
//! Incremental runs only add keys. Keys whose call sites were removed stay in
//! the translation files until [`TranslationExtractor::prune`] is run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::{
    config::Config,
    core::{
        ExtractionResult, SyncError,
        extract::{ExtractOptions, extract_file},
        file_scanner::{is_excluded, is_scannable_file, normalize_path, scan_files},
        plurals::{CldrPluralRules, PluralRules},
        sync::{FilePruneReport, FileSyncReport, Pruner, Synchronizer},
    },
};

/// Outcome of a full or incremental run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of source files that were extracted.
    pub source_files: usize,
    /// Number of distinct (context, key) pairs extracted.
    pub key_count: usize,
    /// Source files that could not be read or parsed. When non-empty, no
    /// translation file was synchronized.
    pub source_errors: Vec<SyncError>,
    pub files: Vec<FileSyncReport>,
}

impl RunReport {
    pub fn failed_files(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_failed()).count()
    }

    pub fn added_keys(&self) -> usize {
        self.files.iter().map(|f| f.outcome.added()).sum()
    }
}

/// What happened for one changed file.
#[derive(Debug)]
pub enum FileChangeOutcome {
    /// The file is outside the source root or not a source file.
    Skipped,
    Ran(RunReport),
}

#[derive(Debug, Default)]
pub struct PruneRunReport {
    pub source_files: usize,
    pub key_count: usize,
    pub source_errors: Vec<SyncError>,
    pub files: Vec<FilePruneReport>,
}

/// Keys merged from a set of source files, plus the files that failed.
struct Extraction {
    keys: ExtractionResult,
    source_files: usize,
    errors: Vec<SyncError>,
}

pub struct TranslationExtractor {
    root: PathBuf,
    src_dir: PathBuf,
    translations_dir: PathBuf,
    languages: Vec<String>,
    ignores: Vec<Pattern>,
    options: ExtractOptions,
    plurals: Box<dyn PluralRules>,
    dry_run: bool,
    verbose: bool,
}

impl TranslationExtractor {
    /// Build an extractor for the project at `root`. Relative paths in the
    /// config are resolved against `root`.
    pub fn new(config: &Config, root: &Path) -> Result<Self> {
        config.validate()?;
        let root = std::path::absolute(root)
            .map(|root| normalize_path(&root))
            .with_context(|| format!("Invalid project root: {}", root.display()))?;

        Ok(Self {
            src_dir: normalize_path(&root.join(&config.src_path)),
            translations_dir: normalize_path(&root.join(&config.translations_path)),
            root,
            languages: config.languages.clone(),
            ignores: config.ignore_patterns()?,
            options: ExtractOptions {
                function_name: config.function_name.clone(),
                contexts: config.contexts,
            },
            plurals: Box::new(CldrPluralRules),
            dry_run: false,
            verbose: config.verbose,
        })
    }

    /// Replace the CLDR plural rules.
    pub fn with_plural_rules(mut self, plurals: impl PluralRules + 'static) -> Self {
        self.plurals = Box::new(plurals);
        self
    }

    /// Compute outcomes without writing translation files.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Full run: extract every source file and synchronize all translation files.
    pub fn on_build_start(&mut self) -> RunReport {
        if self.verbose {
            println!("Extracting translation keys from {}", self.src_dir.display());
        }
        let extraction = self.extract_all();
        self.synchronize(extraction)
    }

    /// Incremental run for a single changed file. Only adds keys.
    ///
    /// A relative `file` is taken relative to the project root. Files the full
    /// run would not scan (outside the source root, other extensions, ignored)
    /// are skipped.
    pub fn on_file_changed(&mut self, file: &Path) -> FileChangeOutcome {
        let file = normalize_path(&self.root.join(file));
        if !file.starts_with(&self.src_dir)
            || !is_scannable_file(&file)
            || is_excluded(&self.src_dir, &file, &self.ignores)
        {
            return FileChangeOutcome::Skipped;
        }

        if self.verbose {
            println!("File changed: {}", file.display());
        }
        let extraction = self.extract_files([file]);
        FileChangeOutcome::Ran(self.synchronize(extraction))
    }

    /// Full extraction followed by removal of entries nothing produces anymore.
    ///
    /// Reports only, unless `apply` is set.
    pub fn prune(&mut self, apply: bool) -> PruneRunReport {
        let extraction = self.extract_all();
        let mut report = PruneRunReport {
            source_files: extraction.source_files,
            key_count: extraction.keys.key_count(),
            source_errors: extraction.errors,
            files: Vec::new(),
        };
        if !report.source_errors.is_empty() {
            return report;
        }

        report.files = Pruner::new(&self.translations_dir, &self.languages, self.plurals.as_ref())
            .apply(apply)
            .contexts(self.options.contexts)
            .prune(&extraction.keys);
        report
    }

    fn extract_all(&self) -> Extraction {
        match scan_files(&self.src_dir, &self.ignores) {
            Ok(files) => {
                if self.verbose {
                    println!("Found {} source file(s)", files.len());
                }
                self.extract_files(files)
            }
            Err(err) => Extraction {
                keys: ExtractionResult::new(),
                source_files: 0,
                errors: vec![err],
            },
        }
    }

    fn extract_files(&self, files: impl IntoIterator<Item = PathBuf>) -> Extraction {
        let mut extraction = Extraction {
            keys: ExtractionResult::new(),
            source_files: 0,
            errors: Vec::new(),
        };

        for file in files {
            extraction.source_files += 1;
            match extract_file(&file, &self.options) {
                Ok(keys) => {
                    if self.verbose {
                        println!(
                            "  {}: {} key(s)",
                            self.display_path(&file).display(),
                            keys.key_count()
                        );
                    }
                    extraction.keys.merge(keys);
                }
                Err(err) => extraction.errors.push(err),
            }
        }
        extraction
    }

    fn synchronize(&self, extraction: Extraction) -> RunReport {
        let mut report = RunReport {
            source_files: extraction.source_files,
            key_count: extraction.keys.key_count(),
            source_errors: extraction.errors,
            files: Vec::new(),
        };
        if !report.source_errors.is_empty() {
            return report;
        }

        report.files = Synchronizer::new(&self.translations_dir, &self.languages, self.plurals.as_ref())
            .dry_run(self.dry_run)
            .sync(&extraction.keys);
        report
    }

    /// `path` relative to the project root when it lies inside it.
    pub fn display_path<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
