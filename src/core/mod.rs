//! Extraction and synchronization engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner`: enumerate `.js/.jsx/.ts/.tsx` files under the source root
//! 2. `parsers` + `extract`: parse each file and collect translation keys
//! 3. `keys`: merge per-file results into one [`ExtractionResult`]
//! 4. `sync`: add missing keys to every translation file, or prune stale ones
//!
//! `host` drives the pipeline as build hooks; `plurals` supplies the plural
//! categories of each language.

pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod host;
pub mod keys;
pub mod parsers;
pub mod plurals;
pub mod sync;

pub use error::SyncError;
pub use host::{FileChangeOutcome, PruneRunReport, RunReport, TranslationExtractor};
pub use keys::{ExtractionResult, KeyMetadata};
pub use sync::{FilePruneReport, FileSyncReport, PruneOutcome, SyncOutcome};
