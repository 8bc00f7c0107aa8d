//! Lump directory entry (16 bytes)

use crate::error::{BspError, Result};
use crate::offset::LUMP_ENTRY_SIZE;
use binrw::{BinRead, BinResult};
use std::io::{Read, Seek};
use std::ops::Range;

/// One record of the lump directory
///
/// Any four integers form a legal entry; nothing is validated on construction.
/// On disk the fields are little-endian `i32` in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LumpEntry {
    /// Absolute offset of the payload within the file
    pub file_offset: i32,
    /// Payload length in bytes (0 for unused lumps)
    pub file_length: i32,
    /// Lump-specific format version
    pub version: i32,
    /// Lump-specific identification tag, 0 when uncompressed
    pub four_cc: i32,
}

impl LumpEntry {
    /// Create a new entry
    pub const fn new(file_offset: i32, file_length: i32, version: i32, four_cc: i32) -> Self {
        Self {
            file_offset,
            file_length,
            version,
            four_cc,
        }
    }

    /// Decode one entry from the current position of `reader`
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; LUMP_ENTRY_SIZE];
        reader
            .read_exact(&mut buf)
            .map_err(|e| BspError::from_read(e, "lump directory entry"))?;
        Ok(Self::from_le_bytes(buf))
    }

    /// Build an entry from its 16-byte on-disk form
    pub fn from_le_bytes(bytes: [u8; LUMP_ENTRY_SIZE]) -> Self {
        let field = |i: usize| {
            i32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Self {
            file_offset: field(0),
            file_length: field(4),
            version: field(8),
            four_cc: field(12),
        }
    }

    /// Whether the lump carries no payload
    pub fn is_empty(&self) -> bool {
        self.file_length == 0
    }

    /// The tag as it appears in the file
    pub fn four_cc_bytes(&self) -> [u8; 4] {
        self.four_cc.to_le_bytes()
    }

    /// Whether the tag is set (payload is stored compressed by the map compiler)
    pub fn is_compressed(&self) -> bool {
        self.four_cc != 0
    }

    /// Absolute byte range of the payload
    ///
    /// Fails with [`BspError::InvalidLump`] if offset or length is negative.
    pub fn byte_range(&self) -> Result<Range<u64>> {
        let invalid = || BspError::InvalidLump {
            offset: self.file_offset,
            length: self.file_length,
        };
        let start = u64::try_from(self.file_offset).map_err(|_| invalid())?;
        let len = u64::try_from(self.file_length).map_err(|_| invalid())?;
        Ok(start..start + len)
    }
}

impl BinRead for LumpEntry {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        _endian: binrw::Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        // Always little-endian regardless of the requested endian
        let mut buf = [0u8; LUMP_ENTRY_SIZE];
        reader.read_exact(&mut buf)?;
        Ok(Self::from_le_bytes(buf))
    }
}
