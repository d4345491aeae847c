// src/entry/record_entry.rs
use crate::error::Result;
use crate::types::RecordAttributes;
use crate::utils::eof_as_truncated;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Record list entry of a non-resource database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub offset: u32,
    pub attributes: RecordAttributes,
    /// 24-bit unique id
    pub unique_id: u32,
    pub length: u32,
}

impl RecordEntry {
    pub const SIZE: usize = 8;
    pub const UNIQUE_ID_MASK: u32 = 0x00FF_FFFF;

    pub(crate) fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let offset = reader.read_u32::<BigEndian>().map_err(eof_as_truncated("record_offset", 4))?;
        // Attribute byte sits in the most significant byte of the word
        let word = reader.read_u32::<BigEndian>().map_err(eof_as_truncated("record_attributes", 4))?;

        Ok(RecordEntry {
            offset,
            attributes: RecordAttributes::new((word >> 24) as u8),
            unique_id: word & Self::UNIQUE_ID_MASK,
            length: 0,
        })
    }
}
