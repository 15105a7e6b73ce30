//! Low-level ZIP archive parser.
//!
//! This module handles the binary parsing of ZIP file structures,
//! reading from any source that implements the [`ReadAt`] trait.
//!
//! ## Parsing Strategy
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the file's end
//! 2. If ZIP64, read the ZIP64 EOCD for large file support
//! 3. Read the Central Directory to get metadata for all files
//!
//! Only the central directory is consulted. Local file headers and
//! file data are never touched, so listing an archive costs one read
//! for the tail and one for the directory.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use crate::io::ReadAt;
use anyhow::{Result, bail};

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: u64 = 65535;

/// Central directory reader for a single archive.
///
/// Generic over the reader type so tests can parse archives held in
/// memory. The reader is owned and released together with the parser.
///
/// ```ignore
/// let parser = ZipParser::new(LocalFileReader::new(path)?);
/// for entry in parser.list_files()? {
///     println!("{} {}", entry.file_name, entry.uncompressed_size);
/// }
/// ```
pub struct ZipParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> ZipParser<R> {
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// Handles both the common case (no archive comment) and archives
    /// with comments by searching backwards for the signature.
    ///
    /// # Returns
    ///
    /// A tuple of (EOCD record, offset of EOCD in file).
    ///
    /// # Errors
    ///
    /// Returns an error if no valid EOCD can be found, indicating
    /// the file is not a valid ZIP archive.
    pub fn find_eocd(&self) -> Result<(EndOfCentralDirectory, u64)> {
        // Try the no-comment layout first; it avoids reading 64 KiB.
        if self.size >= EndOfCentralDirectory::SIZE as u64 {
            let offset = self.size - EndOfCentralDirectory::SIZE as u64;
            let mut buf = vec![0u8; EndOfCentralDirectory::SIZE];
            self.reader.read_exact_at(offset, &mut buf)?;

            if &buf[0..4] == EndOfCentralDirectory::SIGNATURE && &buf[20..22] == b"\x00\x00" {
                let eocd = EndOfCentralDirectory::from_bytes(&buf)?;
                return Ok((eocd, offset));
            }
        }

        let search_size = (MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE as u64).min(self.size);
        let search_start = self.size - search_size;

        let mut buf = vec![0u8; search_size as usize];
        self.reader.read_exact_at(search_start, &mut buf)?;

        // Search backwards for EOCD signature (PK\x05\x06)
        for i in (0..buf.len().saturating_sub(EndOfCentralDirectory::SIZE)).rev() {
            if &buf[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
                // The comment length must account for every trailing byte.
                let comment_len = u16::from_le_bytes([buf[i + 20], buf[i + 21]]) as usize;

                if comment_len == buf.len() - i - EndOfCentralDirectory::SIZE {
                    let eocd = EndOfCentralDirectory::from_bytes(
                        &buf[i..i + EndOfCentralDirectory::SIZE],
                    )?;
                    return Ok((eocd, search_start + i as u64));
                }
            }
        }

        bail!("Not a valid ZIP file")
    }

    /// Read the ZIP64 End of Central Directory record.
    ///
    /// Called when the regular EOCD indicates ZIP64 extensions are needed
    /// (fields set to 0xFFFF or 0xFFFFFFFF).
    ///
    /// # Returns
    ///
    /// A tuple of (ZIP64 EOCD record, offset of that record in file).
    ///
    /// The locator stores the record's offset relative to the start of the
    /// ZIP data. When data is prepended to the archive that offset misses,
    /// and the record is looked up directly in front of the locator instead.
    pub fn read_zip64_eocd(&self, eocd_offset: u64) -> Result<(Zip64EOCD, u64)> {
        // The locator sits immediately before the regular EOCD
        let Some(locator_offset) = eocd_offset.checked_sub(Zip64EOCDLocator::SIZE as u64) else {
            bail!("Missing ZIP64 locator");
        };
        let mut locator_buf = vec![0u8; Zip64EOCDLocator::SIZE];
        self.reader.read_exact_at(locator_offset, &mut locator_buf)?;

        let locator = Zip64EOCDLocator::from_bytes(&locator_buf)?;
        if locator
            .eocd64_offset
            .checked_add(Zip64EOCD::MIN_SIZE as u64)
            .is_none_or(|end| end > locator_offset)
        {
            bail!("ZIP64 End of Central Directory out of bounds");
        }

        let mut eocd64_buf = vec![0u8; Zip64EOCD::MIN_SIZE];
        self.reader
            .read_exact_at(locator.eocd64_offset, &mut eocd64_buf)?;
        if let Ok(eocd64) = Zip64EOCD::from_bytes(&eocd64_buf) {
            return Ok((eocd64, locator.eocd64_offset));
        }

        let adjacent = locator_offset - Zip64EOCD::MIN_SIZE as u64;
        self.reader.read_exact_at(adjacent, &mut eocd64_buf)?;
        Ok((Zip64EOCD::from_bytes(&eocd64_buf)?, adjacent))
    }

    /// List all entries in the ZIP archive, in central directory order.
    ///
    /// Directory entries are included and flagged; callers decide
    /// whether to keep them. Archives with data in front of the ZIP
    /// (self-extracting stubs) are read by locating the Central Directory
    /// relative to the end record rather than trusting its stored offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive is invalid, truncated, or its
    /// central directory points outside the file.
    pub fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        let (eocd, eocd_offset) = self.find_eocd()?;

        // `directory_end` is where the Central Directory must stop
        let (cd_offset, cd_size, total_entries, directory_end) = if eocd.is_zip64() {
            let (eocd64, eocd64_offset) = self.read_zip64_eocd(eocd_offset)?;
            (
                eocd64.cd_offset,
                eocd64.cd_size,
                eocd64.total_entries,
                eocd64_offset,
            )
        } else {
            (
                eocd.cd_offset as u64,
                eocd.cd_size as u64,
                eocd.total_entries as u64,
                eocd_offset,
            )
        };

        // Bytes preceding the ZIP data, zero for a plain archive
        let Some(base_offset) = directory_end
            .checked_sub(cd_size)
            .and_then(|start| start.checked_sub(cd_offset))
        else {
            bail!("Central Directory out of bounds");
        };

        let mut cd_data = vec![0u8; cd_size as usize];
        self.reader
            .read_exact_at(base_offset + cd_offset, &mut cd_data)?;

        // A corrupt entry count must not drive the allocation
        let capacity = total_entries.min(cd_size / CDFH_MIN_SIZE as u64) as usize;
        let mut entries = Vec::with_capacity(capacity);
        let mut cursor = Cursor::new(cd_data.as_slice());

        for _ in 0..total_entries {
            entries.push(parse_cdfh(&mut cursor)?);
        }

        Ok(entries)
    }
}

/// Parse a Central Directory File Header from a cursor.
///
/// Only the fields this crate reports are kept: the name, the
/// uncompressed size (widened through the ZIP64 extra field when the
/// header holds the 0xFFFFFFFF marker) and the directory flag.
fn parse_cdfh(cursor: &mut Cursor<&[u8]>) -> Result<ZipFileEntry> {
    let mut sig = [0u8; 4];
    cursor.read_exact(&mut sig)?;
    if sig != CDFH_SIGNATURE {
        bail!("Invalid Central Directory File Header");
    }

    let version_made_by = cursor.read_u16::<LittleEndian>()?;
    let _version_needed = cursor.read_u16::<LittleEndian>()?;
    let _flags = cursor.read_u16::<LittleEndian>()?;
    let _compression_method = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_time = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_date = cursor.read_u16::<LittleEndian>()?;
    let _crc32 = cursor.read_u32::<LittleEndian>()?;
    let _compressed_size = cursor.read_u32::<LittleEndian>()?;
    let mut uncompressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let file_name_length = cursor.read_u16::<LittleEndian>()?;
    let extra_field_length = cursor.read_u16::<LittleEndian>()?;
    let file_comment_length = cursor.read_u16::<LittleEndian>()?;
    let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
    let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
    let external_attrs = cursor.read_u32::<LittleEndian>()?;
    let _lfh_offset = cursor.read_u32::<LittleEndian>()?;

    let mut file_name_bytes = vec![0u8; file_name_length as usize];
    cursor.read_exact(&mut file_name_bytes)?;
    // Non-UTF8 names (legacy code pages) are kept lossily
    let file_name = String::from_utf8_lossy(&file_name_bytes).into_owned();

    let extra_field_end = cursor.position() + extra_field_length as u64;

    while cursor.position() + 4 <= extra_field_end {
        let header_id = cursor.read_u16::<LittleEndian>()?;
        let field_size = cursor.read_u16::<LittleEndian>()?;
        let field_end = cursor.position() + field_size as u64;

        // Uncompressed size is the first ZIP64 field when present
        if header_id == ZIP64_EXTRA_ID
            && uncompressed_size == 0xFFFFFFFF
            && cursor.position() + 8 <= field_end.min(extra_field_end)
        {
            uncompressed_size = cursor.read_u64::<LittleEndian>()?;
        }

        cursor.set_position(field_end);
    }

    cursor.set_position(extra_field_end + file_comment_length as u64);
    if cursor.position() > cursor.get_ref().len() as u64 {
        bail!("Central Directory File Header exceeds directory size");
    }

    let is_directory = is_directory_entry(&file_name, version_made_by, external_attrs);

    Ok(ZipFileEntry {
        file_name,
        uncompressed_size,
        is_directory,
    })
}
