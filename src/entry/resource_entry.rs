// src/entry/resource_entry.rs
use crate::error::Result;
use crate::types::TypeCode;
use crate::utils::eof_as_truncated;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Resource list entry of a resource (PRC) database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub kind: TypeCode,
    pub id: u16,
    pub offset: u32,
    pub length: u32,
}

impl ResourceEntry {
    pub const SIZE: usize = 10;

    pub(crate) fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let kind = TypeCode::new(reader.read_u32::<BigEndian>().map_err(eof_as_truncated("resource_type", 4))?);
        let id = reader.read_u16::<BigEndian>().map_err(eof_as_truncated("resource_id", 2))?;
        let offset = reader.read_u32::<BigEndian>().map_err(eof_as_truncated("resource_offset", 4))?;

        Ok(ResourceEntry {
            kind,
            id,
            offset,
            length: 0,
        })
    }
}
