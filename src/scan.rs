//! The full scan: locate, inspect, resolve, write.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{ScanError, ScanResult};
use crate::inspect::inspect;
use crate::locate::locate;
use crate::report::write_report;
use crate::resolve::{Groups, add_records, resolve};

/// Counters reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Archives found below the input directory
    pub archives_found: usize,
    /// Archives that contributed at least one record
    pub archives_processed: usize,
    /// Archives that could not be read
    pub archives_skipped: usize,
    /// Distinct file names in the report
    pub unique_files: usize,
    /// Where the report was written
    pub output_file: PathBuf,
}

/// Run one scan with `config`.
///
/// An archive that cannot be read is logged and skipped. Traversal
/// failures, an input tree without archives, and report write failures
/// end the run; in the no-archive case the output file is not touched.
pub fn run(config: &Config) -> ScanResult<ScanSummary> {
    info!("Searching for archives in {}", config.input_dir.display());

    let archives = locate(&config.input_dir)?;
    if archives.is_empty() {
        return Err(ScanError::NoArchivesFound {
            root: config.input_dir.clone(),
        });
    }
    info!("Found {} archives", archives.len());

    let mut groups = Groups::new();
    let mut archives_processed = 0;
    let mut archives_skipped = 0;

    for archive in &archives {
        match inspect(archive) {
            Ok(records) => {
                debug!("{}: {} files", archive.display(), records.len());
                if !records.is_empty() {
                    archives_processed += 1;
                }
                add_records(&mut groups, records);
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                warn!("{err}");
                archives_skipped += 1;
            }
        }
    }

    let resolved = resolve(groups);
    write_report(&config.output_file, &resolved)?;

    Ok(ScanSummary {
        archives_found: archives.len(),
        archives_processed,
        archives_skipped,
        unique_files: resolved.len(),
        output_file: config.output_file.clone(),
    })
}
