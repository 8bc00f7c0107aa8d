//! BSP file header and lump directory decoding
//!
//! The header is 1036 bytes: identifier, version, 64 directory entries and the
//! map revision, all little-endian `i32`. Two ways in:
//!
//! - [`BspHeader::decode`] reads the whole header sequentially and checks the
//!   identifier. It never seeks, so any [`Read`] works.
//! - [`read_entry_at`] seeks straight to one directory entry. It does **not**
//!   check the identifier or version; the caller is trusted to know the source
//!   is a BSP file.

use crate::entry::LumpEntry;
use crate::error::{BspError, Result};
use crate::lump_id::LumpId;
use crate::offset::{LUMP_COUNT, VBSP_MAGIC, checked_index, lump_entry_offset};
use binrw::{BinRead, BinResult};
use std::io::{Read, Seek, SeekFrom};

/// Decoded BSP header
///
/// Only `version` can be changed after decoding (see [`BspHeader::set_version`]);
/// the identifier, directory and map revision are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspHeader {
    identifier: i32,
    version: i32,
    lumps: [LumpEntry; LUMP_COUNT],
    map_revision: i32,
}

fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| BspError::from_read(e, field))?;
    Ok(i32::from_le_bytes(buf))
}

impl BspHeader {
    /// Create a header carrying the `VBSP` identifier
    pub fn new(version: i32, lumps: [LumpEntry; LUMP_COUNT], map_revision: i32) -> Self {
        Self {
            identifier: VBSP_MAGIC,
            version,
            lumps,
            map_revision,
        }
    }

    /// Decode a full header from the current position of `reader`.
    ///
    /// Stops after the first four bytes if they are not `VBSP`.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let identifier = read_i32(reader, "identifier")?;
        if identifier != VBSP_MAGIC {
            return Err(BspError::InvalidFormat(identifier));
        }

        let version = read_i32(reader, "version")?;

        let mut lumps = [LumpEntry::default(); LUMP_COUNT];
        for lump in &mut lumps {
            *lump = LumpEntry::decode(reader)?;
        }

        let map_revision = read_i32(reader, "map revision")?;

        Ok(Self {
            identifier,
            version,
            lumps,
            map_revision,
        })
    }

    /// Decode a header from the start of an in-memory buffer
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut slice = data;
        Self::decode(&mut slice)
    }

    /// File identifier, always [`VBSP_MAGIC`]
    pub fn identifier(&self) -> i32 {
        self.identifier
    }

    /// BSP format version
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Overwrite the format version
    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    /// The full lump directory in index order
    pub fn lumps(&self) -> &[LumpEntry; LUMP_COUNT] {
        &self.lumps
    }

    /// Map revision counter
    pub fn map_revision(&self) -> i32 {
        self.map_revision
    }

    /// Directory entry at a raw index
    pub fn entry(&self, index: i64) -> Result<&LumpEntry> {
        let index = checked_index(index)?;
        Ok(&self.lumps[index])
    }

    /// Directory entry for a named lump
    pub fn lump(&self, id: LumpId) -> &LumpEntry {
        &self.lumps[id.index()]
    }

    /// Iterate over lumps with a non-zero length
    pub fn present_lumps(&self) -> impl Iterator<Item = (LumpId, &LumpEntry)> {
        LumpId::ALL
            .iter()
            .zip(self.lumps.iter())
            .filter(|(_, entry)| !entry.is_empty())
            .map(|(id, entry)| (*id, entry))
    }
}

/// Read a single directory entry without decoding the rest of the header.
///
/// Seeks to `8 + index * 16` from the start of `reader`. The identifier and
/// version are not checked. An out-of-range index fails before any I/O.
pub fn read_entry_at<R: Read + Seek>(reader: &mut R, index: i64) -> Result<LumpEntry> {
    let index = checked_index(index)?;
    reader.seek(SeekFrom::Start(lump_entry_offset(index)))?;
    LumpEntry::decode(reader)
}

/// [`read_entry_at`] for a named lump
pub fn read_entry_for<R: Read + Seek>(reader: &mut R, id: LumpId) -> Result<LumpEntry> {
    read_entry_at(reader, id.index() as i64)
}

impl BinRead for BspHeader {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        _endian: binrw::Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let pos = reader.stream_position()?;
        Self::decode(reader).map_err(|e| match e {
            BspError::Io(io) => binrw::Error::Io(io),
            other => binrw::Error::Custom {
                pos,
                err: Box::new(other),
            },
        })
    }
}
