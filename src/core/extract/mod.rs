//! Key extraction: turns one source file into an [`ExtractionResult`].
//!
//! - `key_extractor`: swc visitor recognizing translation calls
//! - `prop_name`: best-effort property name resolution for options objects

pub mod key_extractor;
pub mod prop_name;


use std::{fs, path::Path};

pub use key_extractor::{ExtractOptions, KeyExtractor};

use crate::core::{ExtractionResult, SyncError, parsers::source::parse_source};

/// Extract keys from source text. `file_path` selects the parser dialect and
/// is used in error messages.
pub fn extract_source(
    code: String,
    file_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionResult, SyncError> {
    let module = parse_source(code, file_path)?;
    Ok(KeyExtractor::new(options).extract(&module))
}

/// Read and extract a single source file.
pub fn extract_file(file_path: &Path, options: &ExtractOptions) -> Result<ExtractionResult, SyncError> {
    let code = fs::read_to_string(file_path).map_err(|source| SyncError::SourceRead {
        path: file_path.to_path_buf(),
        source,
    })?;
    extract_source(code, file_path, options)
}
