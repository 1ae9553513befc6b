use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::SyncError;

/// Extensions of files that are scanned for translation calls.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

pub fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Collect every source file under `base_dir`.
///
/// Paths matching any of `ignores` are skipped; a matching directory is not
/// descended into. Any traversal error (missing root, unreadable directory)
/// aborts the scan. Files are returned sorted.
pub fn scan_files(base_dir: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>, SyncError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(base_dir, entry.path(), ignores));

    for entry in walker {
        let entry = entry.map_err(|source| SyncError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| base_dir.to_path_buf()),
            source,
        })?;

        if entry.file_type().is_file() && is_scannable_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Whether `path` itself matches one of `ignores`, either relative to
/// `base_dir` or as given.
pub fn is_ignored(base_dir: &Path, path: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    ignores
        .iter()
        .any(|p| p.matches_path(relative) || p.matches_path(path))
}

/// Whether [`scan_files`] would leave out `path`: it or one of its directories
/// below `base_dir` is ignored.
pub fn is_excluded(base_dir: &Path, path: &Path, ignores: &[Pattern]) -> bool {
    path.ancestors()
        .take_while(|ancestor| *ancestor != base_dir && ancestor.starts_with(base_dir))
        .any(|ancestor| is_ignored(base_dir, ancestor, ignores))
}

/// Resolve `.` and `..` components without touching the file system.
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
