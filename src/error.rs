//! Error taxonomy of a scan run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory, or an entry below it, could not be read.
    #[error("failed to traverse {}: {source}", root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// One archive could not be opened, parsed, or stat'ed.
    #[error("failed to read archive {}: {reason:#}", path.display())]
    Open { path: PathBuf, reason: anyhow::Error },

    /// The report could not be created or written.
    #[error("failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no ZIP archives found under {}", root.display())]
    NoArchivesFound { root: PathBuf },
}

impl ScanError {
    /// Whether the error ends the whole run rather than a single archive.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScanError::Open { .. })
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
