//! Reconciling extracted keys with the translation files on disk.
//!
//! - `translation_file`: load, edit and atomically rewrite one JSON file
//! - `synchronizer`: add missing keys for every (context, language) pair
//! - `prune`: remove keys that are no longer extracted

pub mod prune;
pub mod synchronizer;
pub mod translation_file;

pub use prune::{FilePruneReport, PruneOutcome, Pruner};
pub use synchronizer::{
    FileSyncReport, SyncOutcome, Synchronizer, expected_entries, translation_file_path,
};
pub use translation_file::TranslationFile;
