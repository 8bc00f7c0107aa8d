//! Header layout constants and lump directory addressing
//!
//! ```text
//! 0     identifier   (4)
//! 4     version      (4)
//! 8     lump[0]      (16)
//! 24    lump[1]      (16)
//! ...
//! 1016  lump[63]     (16)
//! 1032  map_revision (4)
//! 1036  end of header
//! ```

use crate::error::{BspError, Result};

/// Little-endian `VBSP` read as a 32-bit integer
pub const VBSP_MAGIC: i32 = 0x5053_4256;

/// Number of entries in the lump directory
pub const LUMP_COUNT: usize = 64;

/// Size of one lump directory entry in bytes
pub const LUMP_ENTRY_SIZE: usize = 16;

/// Byte offset of the first directory entry (after identifier and version)
pub const LUMP_DIRECTORY_OFFSET: u64 = 8;

/// Byte offset of the map revision field
pub const MAP_REVISION_OFFSET: u64 = lump_entry_offset(LUMP_COUNT);

/// Total size of the fixed header in bytes
pub const HEADER_SIZE: usize = MAP_REVISION_OFFSET as usize + 4;

/// Absolute byte offset of directory entry `index` within the header.
///
/// Pure arithmetic: `8 + index * 16`. Callers must range-check `index`;
/// [`checked_index`] does that for untrusted input.
pub const fn lump_entry_offset(index: usize) -> u64 {
    LUMP_DIRECTORY_OFFSET + (index as u64) * (LUMP_ENTRY_SIZE as u64)
}

/// Validate a raw lump index against the directory bounds
pub fn checked_index(index: i64) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < LUMP_COUNT)
        .ok_or(BspError::OutOfRange(index))
}
