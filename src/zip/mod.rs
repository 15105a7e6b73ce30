//! ZIP central directory reading.
//!
//! ## Architecture
//!
//! - [`structures`]: Data structures representing ZIP format elements (EOCD, file headers, etc.)
//! - [`parser`]: Parsing of those structures from any [`ReadAt`](crate::io::ReadAt) source
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! Everything this crate needs (entry names, uncompressed sizes, the
//! directory flag) lives in the Central Directory, so the parser reads
//! the EOCD first and then the directory, and never decompresses data.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - Archive comments
//! - ZIP64 extensions for archives and entries > 4GB
//! - Data prepended to the archive (self-extracting stubs)
//!
//! ## Limitations
//!
//! - No multi-disk archive support

mod parser;
mod structures;

pub use parser::ZipParser;
pub use structures::*;
