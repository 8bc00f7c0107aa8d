//! Test utilities for building synthetic BSP images
//!
//! Header images are written by hand since the crate only decodes.

use crate::entry::LumpEntry;
use crate::offset::{HEADER_SIZE, LUMP_COUNT, VBSP_MAGIC};

/// Serialize a header with an arbitrary identifier
pub fn header_bytes_with_ident(
    identifier: i32,
    version: i32,
    lumps: &[LumpEntry; LUMP_COUNT],
    map_revision: i32,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEADER_SIZE);
    data.extend_from_slice(&identifier.to_le_bytes());
    data.extend_from_slice(&version.to_le_bytes());
    for lump in lumps {
        data.extend_from_slice(&lump.file_offset.to_le_bytes());
        data.extend_from_slice(&lump.file_length.to_le_bytes());
        data.extend_from_slice(&lump.version.to_le_bytes());
        data.extend_from_slice(&lump.four_cc.to_le_bytes());
    }
    data.extend_from_slice(&map_revision.to_le_bytes());
    data
}

/// Serialize a header with the `VBSP` identifier
pub fn header_bytes(version: i32, lumps: &[LumpEntry; LUMP_COUNT], map_revision: i32) -> Vec<u8> {
    header_bytes_with_ident(VBSP_MAGIC, version, lumps, map_revision)
}

/// A directory where every entry has distinct field values
pub fn distinct_lumps() -> [LumpEntry; LUMP_COUNT] {
    std::array::from_fn(|i| {
        let i = i as i32;
        LumpEntry::new(
            HEADER_SIZE as i32 + i * 100,
            i * 3,
            i % 4,
            if i % 5 == 0 { 0x414D_5A4C } else { 0 },
        )
    })
}

/// Build a complete map image: header followed by the given payloads.
///
/// Payloads are laid out back to back after the header in the order given;
/// lumps not listed stay zeroed.
pub fn map_with_payloads(version: i32, map_revision: i32, payloads: &[(usize, &[u8])]) -> Vec<u8> {
    let mut lumps = [LumpEntry::default(); LUMP_COUNT];
    let mut body = Vec::new();
    for &(index, payload) in payloads {
        let offset = HEADER_SIZE + body.len();
        lumps[index] = LumpEntry::new(offset as i32, payload.len() as i32, 0, 0);
        body.extend_from_slice(payload);
    }

    let mut data = header_bytes(version, &lumps, map_revision);
    data.extend_from_slice(&body);
    data
}
