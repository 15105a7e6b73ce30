//! Fixed-width text report of the resolved files.
//!
//! ```text
//! Name                                               Release date         Size       Archive
//! ------------------------------------------------------------------------------------------
//! lib.dll                                            2024-03-01 12:00:00  200        b.zip
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ScanError, ScanResult};
use crate::record::FileRecord;
use crate::resolve::Resolution;

/// Width of the name column; longer names are truncated.
pub const NAME_WIDTH: usize = 50;
const DATE_WIDTH: usize = 20;
const SIZE_WIDTH: usize = 10;
const ELLIPSIS: &str = "...";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shorten `name` to `max_len` characters, ending in `...` when cut.
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_owned();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut cut: String = name.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn header_line() -> String {
    format!(
        "{:<NAME_WIDTH$} {:<DATE_WIDTH$} {:<SIZE_WIDTH$} {}",
        "Name", "Release date", "Size", "Archive"
    )
}

fn row_line(record: &FileRecord) -> String {
    format!(
        "{:<NAME_WIDTH$} {:<DATE_WIDTH$} {:<SIZE_WIDTH$} {}",
        truncate_name(record.name(), NAME_WIDTH),
        record.mod_time().format(DATE_FORMAT).to_string(),
        record.size(),
        record.archive_name()
    )
}

fn write_lines<W: Write>(out: &mut W, resolved: &Resolution) -> io::Result<()> {
    let header = header_line();
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;

    for record in resolved.values() {
        writeln!(out, "{}", row_line(record))?;
    }

    Ok(())
}

/// Render the report in memory.
pub fn render_report(resolved: &Resolution) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_lines(&mut buf, resolved);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create (or truncate) `output_path` and write the report to it.
///
/// On failure the file may be left partially written.
pub fn write_report(output_path: &Path, resolved: &Resolution) -> ScanResult<()> {
    let to_write_error = |source: io::Error| ScanError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(to_write_error)?;
    let mut out = BufWriter::new(file);
    write_lines(&mut out, resolved).map_err(to_write_error)?;
    out.flush().map_err(to_write_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::fs;

    fn resolution(entries: &[(&str, u64, &str)]) -> Resolution {
        let when = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        entries
            .iter()
            .map(|(name, size, archive)| {
                let record =
                    FileRecord::new((*name).to_owned(), when, Path::new(archive), *size);
                ((*name).to_owned(), record)
            })
            .collect()
    }

    #[test]
    fn short_names_are_untouched() {
        let exact = "a".repeat(NAME_WIDTH);
        assert_eq!(truncate_name("readme.txt", NAME_WIDTH), "readme.txt");
        assert_eq!(truncate_name(&exact, NAME_WIDTH), exact);
    }

    #[test]
    fn long_names_keep_47_chars_and_ellipsis() {
        let long: String = ('a'..='z').cycle().take(60).collect();
        let cut = truncate_name(&long, NAME_WIDTH);
        assert_eq!(cut.len(), NAME_WIDTH);
        assert_eq!(&cut[..47], &long[..47]);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let long = "ж".repeat(55);
        let cut = truncate_name(&long, NAME_WIDTH);
        assert_eq!(cut.chars().count(), NAME_WIDTH);
        assert!(cut.starts_with(&"ж".repeat(47)));
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn header_and_divider_have_equal_length() {
        let text = render_report(&Resolution::new());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name "));
        assert_eq!(&lines[0][51..63], "Release date");
        assert_eq!(&lines[0][72..76], "Size");
        assert!(lines[0].ends_with("Archive"));
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn rows_are_fixed_width_and_sorted_by_name() {
        let text = render_report(&resolution(&[
            ("readme.txt", 10, "dist/b.zip"),
            ("lib.dll", 200, "b.zip"),
        ]));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        let expected = format!(
            "{:<50} {:<20} {:<10} {}",
            "lib.dll", "2024-03-01 12:30:05", 200, "b.zip"
        );
        assert_eq!(lines[2], expected);
        assert!(lines[3].starts_with("readme.txt"));
        assert!(lines[3].ends_with(" b.zip"));
        assert_eq!(&lines[3][72..82], "10        ");
    }

    #[test]
    fn long_name_row_is_truncated() {
        let long = format!("deeply/nested/{}", "x".repeat(60));
        let text = render_report(&resolution(&[(long.as_str(), 1, "a.zip")]));
        let row = text.lines().nth(2).unwrap();
        assert_eq!(&row[..50], format!("{}...", &long[..47]));
        assert_eq!(&row[50..51], " ");
    }

    #[test]
    fn writes_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "stale contents that must disappear\n".repeat(100)).unwrap();

        let resolved = resolution(&[("lib.dll", 200, "b.zip")]);
        write_report(&path, &resolved).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), render_report(&resolved));
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.txt");
        let err = write_report(&path, &Resolution::new()).unwrap_err();
        assert!(matches!(err, ScanError::Write { .. }));
        assert!(err.is_fatal());
    }
}
