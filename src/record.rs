use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// One occurrence of a named entry inside one archive.
///
/// `mod_time` is the archive's own filesystem modification time, shared
/// by every record produced from that archive. Timestamps stored inside
/// ZIP entries vary too much between tools to be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: String,
    mod_time: DateTime<Local>,
    archive_path: PathBuf,
    archive_name: String,
    size: u64,
}

impl FileRecord {
    pub fn new(name: String, mod_time: DateTime<Local>, archive_path: &Path, size: u64) -> Self {
        let archive_name = archive_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| archive_path.display().to_string());

        Self {
            name,
            mod_time,
            archive_path: archive_path.to_path_buf(),
            archive_name,
            size,
        }
    }

    /// Entry path as stored in the archive.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mod_time(&self) -> DateTime<Local> {
        self.mod_time
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Base filename of the containing archive.
    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    /// Uncompressed size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}
