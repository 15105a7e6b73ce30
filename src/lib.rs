//! # ziplatest
//!
//! Scans a directory tree for ZIP archives and reports, for every file name
//! found inside them, which archive holds the most recently modified copy.
//!
//! The run is a straight pipeline:
//!
//! 1. [`locate`] walks the input directory and collects `.zip` files
//! 2. [`inspect`] reads each archive's central directory into [`FileRecord`]s,
//!    stamped with the archive's own modification time
//! 3. [`resolve`] keeps the newest record per file name
//! 4. [`write_report`] renders a fixed-width text table
//!
//! [`scan::run`] drives all four steps and applies the failure policy:
//! unreadable archives are skipped with a warning, everything else aborts.
//!
//! ## Example
//!
//! ```no_run
//! use ziplatest::{Config, scan};
//!
//! fn main() -> anyhow::Result<()> {
//!     let summary = scan::run(&Config::new("/srv/releases", "latest_releases.txt"))?;
//!     println!("{} distinct files", summary.unique_files);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod io;
pub mod locate;
pub mod record;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod zip;

pub use cli::Cli;
pub use config::Config;
pub use error::{ScanError, ScanResult};
pub use inspect::inspect;
pub use crate::io::{LocalFileReader, ReadAt};
pub use locate::{is_archive_file, locate};
pub use record::FileRecord;
pub use report::{render_report, truncate_name, write_report};
pub use resolve::{Groups, Resolution, add_records, resolve};
pub use scan::ScanSummary;
pub use crate::zip::{ZipFileEntry, ZipParser};
