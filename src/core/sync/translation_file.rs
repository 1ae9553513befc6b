use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::core::SyncError;

/// A flat `key -> translation` JSON file.
///
/// Values are kept as loaded, so hand-written non-string values survive a
/// rewrite. Output is always sorted by key with 2-space indentation.
pub struct TranslationFile {
    path: PathBuf,
    entries: Map<String, Value>,
    exists: bool,
}

impl TranslationFile {
    /// Open an existing translation file, or start an empty one if it does not exist.
    pub fn open(path: &Path) -> Result<Self, SyncError> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                entries: Map::new(),
                exists: false,
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SyncError::TranslationRead {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| SyncError::TranslationFileCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let Value::Object(entries) = value else {
            return Err(SyncError::TranslationFileCorrupt {
                path: path.to_path_buf(),
                reason: "root of a translation file must be an object".to_string(),
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            exists: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file was present on disk when opened.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `key` with an empty translation unless it is already present.
    ///
    /// Returns true if the key was added.
    pub fn ensure_key(&mut self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries
            .insert(key.to_string(), Value::String(String::new()));
        true
    }

    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Serialized file content: keys sorted, 2-space indentation, trailing newline.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut sorted: Vec<(&String, &Value)> = self.entries.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        let sorted: Map<String, Value> = sorted
            .into_iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let content = serde_json::to_string_pretty(&Value::Object(sorted))?;
        Ok(format!("{}\n", content))
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// The content goes to a temporary file next to the target, which is then
    /// renamed over it, so readers never see a half-written file.
    pub fn save(&self) -> Result<(), SyncError> {
        let write_error = |source: io::Error| SyncError::Write {
            path: self.path.clone(),
            source,
        };

        let content = self
            .render()
            .map_err(|e| write_error(io::Error::other(e)))?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(write_error)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.persist(&self.path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}
