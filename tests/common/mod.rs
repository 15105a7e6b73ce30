#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use zip::write::SimpleFileOptions;

/// Seconds since the epoch used as the base for fixture timestamps.
pub const BASE_SECS: u64 = 1_700_000_000;

pub fn at(offset_secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(BASE_SECS + offset_secs)
}

/// Write a stored (uncompressed) archive of `(name, size)` files and set its mtime.
pub fn write_archive(path: &Path, files: &[(&str, usize)], mtime: SystemTime) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, size) in files {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(&vec![0u8; *size]).unwrap();
        }
    }
    zip.finish().unwrap();

    filetime::set_file_mtime(path, FileTime::from_system_time(mtime)).unwrap();
    path.to_path_buf()
}

/// Data rows of a rendered report (header and divider dropped).
pub fn data_rows(report: &str) -> Vec<String> {
    report.lines().skip(2).map(str::to_owned).collect()
}
