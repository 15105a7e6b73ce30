//! Turning one archive into file records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::error::{ScanError, ScanResult};
use crate::io::LocalFileReader;
use crate::record::FileRecord;
use crate::zip::ZipParser;

/// List the files of one archive as [`FileRecord`]s.
///
/// Directory entries and entries without a name are skipped. Every record
/// carries the archive's filesystem modification time. The archive handle
/// is closed before this returns, whatever the outcome.
pub fn inspect(archive_path: &Path) -> ScanResult<Vec<FileRecord>> {
    read_records(archive_path).map_err(|reason| ScanError::Open {
        path: archive_path.to_path_buf(),
        reason,
    })
}

fn read_records(archive_path: &Path) -> Result<Vec<FileRecord>> {
    let mod_time = archive_mod_time(archive_path)?;

    let parser = ZipParser::new(LocalFileReader::new(archive_path)?);
    let entries = parser.list_files()?;

    let records = entries
        .into_iter()
        .filter(|e| !e.is_directory && !e.file_name.is_empty())
        .map(|e| FileRecord::new(e.file_name, mod_time, archive_path, e.uncompressed_size))
        .collect();

    Ok(records)
}

fn archive_mod_time(archive_path: &Path) -> Result<DateTime<Local>> {
    let modified = fs::metadata(archive_path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to read modification time of {}", archive_path.display()))?;
    Ok(DateTime::<Local>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::fs::File;
    use std::io::Write;
    use std::time::{Duration, SystemTime};
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, files: &[(&str, usize)], dirs: &[&str]) {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        for dir in dirs {
            zip.add_directory(*dir, options).unwrap();
        }
        for (name, size) in files {
            zip.start_file(*name, options).unwrap();
            zip.write_all(&vec![b'x'; *size]).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn skips_directory_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.zip");
        write_zip(
            &path,
            &[("bin/tool.exe", 64), ("README", 5)],
            &["bin", "docs/"],
        );

        let records = inspect(&path).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["bin/tool.exe", "README"]);
        assert_eq!(records[0].size(), 64);
        assert_eq!(records[1].size(), 5);
    }

    #[test]
    fn records_share_the_archive_mod_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.zip");
        write_zip(&path, &[("a.dll", 1), ("b.dll", 2), ("c/d.cfg", 3)], &[]);

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        filetime::set_file_mtime(&path, FileTime::from_system_time(stamp)).unwrap();

        let records = inspect(&path).unwrap();
        assert_eq!(records.len(), 3);
        let expected = DateTime::<Local>::from(stamp);
        assert!(records.iter().all(|r| r.mod_time() == expected));
        assert!(records.iter().all(|r| r.archive_name() == "release.zip"));
        assert!(records.iter().all(|r| r.archive_path() == path));
    }

    #[test]
    fn corrupt_archive_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        fs::write(&path, b"PK\x03\x04 truncated garbage").unwrap();

        let err = inspect(&path).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn missing_archive_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect(&dir.path().join("gone.zip")).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
    }

    #[test]
    fn empty_archive_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.zip");
        write_zip(&path, &[], &["only-a-dir/"]);
        assert!(inspect(&path).unwrap().is_empty());
    }

    #[test]
    fn reads_self_extracting_archive() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("a.zip");
        write_zip(&plain, &[("lib.dll", 100)], &[]);

        let mut stubbed = vec![b'M'; 1000];
        stubbed.extend(fs::read(&plain).unwrap());
        let sfx = dir.path().join("sfx.zip");
        fs::write(&sfx, stubbed).unwrap();

        let records = inspect(&sfx).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "lib.dll");
        assert_eq!(records[0].size(), 100);
        assert_eq!(records[0].archive_name(), "sfx.zip");
    }
}
