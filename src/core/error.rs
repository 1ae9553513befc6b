//! Typed failures of the extraction and synchronization pipeline.
//!
//! Source-side errors (`Walk`, `SourceRead`, `Parse`) concern a single source file and
//! are collected for the whole run. Output-side errors (`TranslationRead`,
//! `TranslationFileCorrupt`, `Write`) concern a single translation file and never stop
//! other files from being processed.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("failed to read translation file {}: {source}", path.display())]
    TranslationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("translation file {} is corrupt: {reason}", path.display())]
    TranslationFileCorrupt { path: PathBuf, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
