//! Lump payload extraction

use crate::entry::LumpEntry;
use crate::error::{BspError, Result};
use std::io::{Read, Seek, SeekFrom};

/// Read the raw payload bytes described by `entry`.
///
/// Seeks to `entry.file_offset` and reads exactly `entry.file_length` bytes.
/// The bytes are returned as stored; compressed lumps are not expanded. A
/// zero-length entry yields an empty vector for any offset, including negative
/// offsets and offsets past the end of the source, without touching `reader`.
pub fn read_payload<R: Read + Seek>(reader: &mut R, entry: &LumpEntry) -> Result<Vec<u8>> {
    if entry.file_length == 0 {
        return Ok(Vec::new());
    }

    let range = entry.byte_range()?;
    let len = range.end - range.start;
    reader.seek(SeekFrom::Start(range.start))?;

    // Length is untrusted, no preallocation
    let mut data = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut data)?;
    if (data.len() as u64) < len {
        return Err(BspError::Truncated {
            field: "lump payload",
        });
    }

    Ok(data)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::header::BspHeader;
    use crate::lump_id::LumpId;
    use crate::offset::HEADER_SIZE;
    use crate::test_utils::map_with_payloads;
    use binrw::io::Cursor;
    use proptest::prelude::*;

    #[test]
    fn test_read_payload_from_map() {
        let entities = b"{\n\"classname\" \"worldspawn\"\n}\n\0";
        let planes = [7u8; 40];
        let data = map_with_payloads(
            20,
            1,
            &[
                (LumpId::Entities.index(), entities.as_slice()),
                (LumpId::Planes.index(), planes.as_slice()),
            ],
        );

        let header = BspHeader::from_bytes(&data).unwrap();
        let mut cursor = Cursor::new(&data);

        let got = read_payload(&mut cursor, header.lump(LumpId::Entities)).unwrap();
        assert_eq!(got, entities);
        let got = read_payload(&mut cursor, header.lump(LumpId::Planes)).unwrap();
        assert_eq!(got, planes);
    }

    #[test]
    fn test_zero_length_payload() {
        let data = map_with_payloads(20, 1, &[]);
        let mut cursor = Cursor::new(&data);

        let empty = LumpEntry::new(HEADER_SIZE as i32, 0, 0, 0);
        assert!(read_payload(&mut cursor, &empty).unwrap().is_empty());

        // Offset well past the end of the source
        let beyond = LumpEntry::new(1_000_000, 0, 0, 0);
        assert!(read_payload(&mut cursor, &beyond).unwrap().is_empty());
    }

    #[test]
    fn test_payload_past_end_is_truncated() {
        let data = map_with_payloads(20, 1, &[(0, b"abcd".as_slice())]);
        let mut cursor = Cursor::new(&data);

        let entry = LumpEntry::new(HEADER_SIZE as i32, 10, 0, 0);
        let err = read_payload(&mut cursor, &entry).unwrap_err();
        assert!(matches!(
            err,
            BspError::Truncated {
                field: "lump payload"
            }
        ));
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let data = map_with_payloads(20, 1, &[]);
        let mut cursor = Cursor::new(&data);

        let err = read_payload(&mut cursor, &LumpEntry::new(-1, 4, 0, 0)).unwrap_err();
        assert!(matches!(err, BspError::InvalidLump { offset: -1, length: 4 }));
        let err = read_payload(&mut cursor, &LumpEntry::new(8, -4, 0, 0)).unwrap_err();
        assert!(matches!(err, BspError::InvalidLump { offset: 8, length: -4 }));
    }

    #[test]
    fn test_zero_length_at_negative_offset() {
        let mut cursor = Cursor::new([0u8; 16]);

        let got = read_payload(&mut cursor, &LumpEntry::new(-1, 0, 0, 0)).unwrap();
        assert!(got.is_empty());
        let got = read_payload(&mut cursor, &LumpEntry::new(i32::MIN, 0, 0, 0)).unwrap();
        assert!(got.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_compressed_payload_returned_verbatim() {
        let raw = b"LZMA\x10\x00\x00\x00opaque";
        let data = map_with_payloads(20, 1, &[(LumpId::PakFile.index(), raw.as_slice())]);
        let mut header_entry = *BspHeader::from_bytes(&data).unwrap().lump(LumpId::PakFile);
        header_entry.four_cc = 0x414D_5A4C;

        let got = read_payload(&mut Cursor::new(&data), &header_entry).unwrap();
        assert_eq!(got, raw);
    }

    proptest! {
        #[test]
        fn payload_matches_source_bytes(
            source in prop::collection::vec(any::<u8>(), 1..512),
            start in 0usize..512,
            len in 0usize..512,
        ) {
            let start = start % source.len();
            let len = len % (source.len() - start + 1);
            let entry = LumpEntry::new(start as i32, len as i32, 0, 0);

            let got = read_payload(&mut Cursor::new(&source), &entry).unwrap();
            prop_assert_eq!(got.as_slice(), &source[start..start + len]);
        }
    }
}
