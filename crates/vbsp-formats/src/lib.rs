//! Header and lump directory decoder for Valve BSP map files
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Intentional for binary operations
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::doc_markdown)] // Lump names don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
//! A compiled Source engine map (`.bsp`) starts with a fixed 1036-byte header:
//! the `VBSP` identifier, a format version, a directory of 64 lumps and a map
//! revision counter. This crate decodes that header and reads individual lump
//! payloads on demand, without parsing the rest of the file.
//!
//! # Components
//!
//! - [`LumpEntry`]: one 16-byte directory record (offset, length, version, tag)
//! - [`lump_entry_offset`]: index to byte offset of a directory record
//! - [`BspHeader`]: full sequential decode with identifier check, plus
//!   [`read_entry_at`] for seeking straight to one record
//! - [`read_payload`]: the bytes a directory entry points at
//! - [`LumpId`]: canonical names for the 64 directory slots
//! - [`BspFile`]: a source paired with its decoded header
//!
//! Lump contents are never interpreted or decompressed.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vbsp_formats::{BspFile, LumpId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bsp = BspFile::open("maps/de_dust2.bsp")?;
//! println!("version {}", bsp.header().version());
//!
//! let entities = bsp.read_lump(LumpId::Entities)?;
//! println!("{}", String::from_utf8_lossy(&entities));
//! # Ok(())
//! # }
//! ```
//!
//! Reading a single directory entry without decoding the whole header:
//!
//! ```rust
//! use std::io::Cursor;
//! use vbsp_formats::{read_entry_at, BspError};
//!
//! let mut cursor = Cursor::new(vec![0u8; 1036]);
//! let entry = read_entry_at(&mut cursor, 40)?;
//! assert!(entry.is_empty());
//! # Ok::<(), BspError>(())
//! ```

#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod file;
pub mod header;
pub mod lump_id;
pub mod offset;
pub mod payload;

// Test utilities module
#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;

pub use entry::LumpEntry;
pub use error::{BspError, Result};
pub use file::BspFile;
pub use header::{BspHeader, read_entry_at, read_entry_for};
pub use lump_id::LumpId;
pub use offset::{
    HEADER_SIZE, LUMP_COUNT, LUMP_DIRECTORY_OFFSET, LUMP_ENTRY_SIZE, MAP_REVISION_OFFSET,
    VBSP_MAGIC, checked_index, lump_entry_offset,
};
pub use payload::read_payload;
