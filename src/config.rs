use std::path::PathBuf;

/// Report path used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "latest_releases.txt";

/// Archive extension, compared case-insensitively.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Inputs of one scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory searched recursively for archives
    pub input_dir: PathBuf,
    /// Destination of the report
    pub output_file: PathBuf,
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_file: output_file.into(),
        }
    }
}
