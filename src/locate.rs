//! Recursive discovery of ZIP archives below a root directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ARCHIVE_EXTENSION;
use crate::error::{ScanError, ScanResult};

/// Whether `path` carries the archive extension (case-insensitive).
pub fn is_archive_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
}

/// Walk `root` depth-first and collect every archive file.
///
/// Siblings are visited in file name order so that repeated runs over the
/// same tree discover archives in the same order. Any unreadable entry
/// aborts the walk; no partial list is returned.
pub fn locate(root: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut archives = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_dir() && is_archive_file(entry.path()) {
            archives.push(entry.into_path());
        }
    }

    Ok(archives)
}
