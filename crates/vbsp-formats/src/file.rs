//! BSP file access: a byte source paired with its decoded header

use crate::entry::LumpEntry;
use crate::error::Result;
use crate::header::BspHeader;
use crate::lump_id::LumpId;
use crate::payload::read_payload;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, trace};

/// Decoded header plus the source it came from
///
/// The reader is owned exclusively; lump reads move its cursor, so they take
/// `&mut self`. Open a second `BspFile` for concurrent access.
#[derive(Debug)]
pub struct BspFile<R: Read + Seek> {
    reader: R,
    header: BspHeader,
}

impl BspFile<BufReader<File>> {
    /// Open and decode a map file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening BSP file: {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl BspFile<Cursor<Vec<u8>>> {
    /// Decode a map held in memory
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        debug!("Decoding BSP from {} byte buffer", data.len());
        Self::new(Cursor::new(data))
    }
}

impl<R: Read + Seek> BspFile<R> {
    /// Decode the header from the reader's current position
    pub fn new(mut reader: R) -> Result<Self> {
        let header = BspHeader::decode(&mut reader)?;
        debug!(
            "Decoded BSP header: version {}, map revision {}, {} lumps present",
            header.version(),
            header.map_revision(),
            header.present_lumps().count()
        );
        Ok(Self { reader, header })
    }

    /// The decoded header
    pub fn header(&self) -> &BspHeader {
        &self.header
    }

    /// Mutable header access; only the version can be changed
    pub fn header_mut(&mut self) -> &mut BspHeader {
        &mut self.header
    }

    /// Directory entry at a raw index
    pub fn entry(&self, index: i64) -> Result<&LumpEntry> {
        self.header.entry(index)
    }

    /// Payload bytes of a named lump
    pub fn read_lump(&mut self, id: LumpId) -> Result<Vec<u8>> {
        let entry = *self.header.lump(id);
        trace!(
            "Reading {} at offset {} ({} bytes)",
            id, entry.file_offset, entry.file_length
        );
        read_payload(&mut self.reader, &entry)
    }

    /// Payload bytes of the lump at a raw index
    pub fn read_lump_at(&mut self, index: i64) -> Result<Vec<u8>> {
        let entry = *self.header.entry(index)?;
        trace!(
            "Reading lump {} at offset {} ({} bytes)",
            index, entry.file_offset, entry.file_length
        );
        read_payload(&mut self.reader, &entry)
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}
