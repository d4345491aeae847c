// src/header/mod.rs
use crate::error::Result;
use crate::types::{DatabaseFlags, PalmTimestamp, TypeCode};
use crate::utils::{decode_latin1_nul_terminated, eof_as_truncated};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// PDB database header (the fixed block at offset 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub flags: DatabaseFlags,
    pub version: u16,
    pub creation_time: PalmTimestamp,
    pub modification_time: PalmTimestamp,
    pub backup_time: PalmTimestamp,
    pub modification_number: u32,
    pub app_info_offset: u32,
    pub sort_info_offset: u32,
    pub db_type: TypeCode,
    pub creator: TypeCode,
    pub unique_id_seed: u32,
    pub next_record_id: u32,
    pub num_records: u16,
}

impl Header {
    pub const SIZE: usize = 78;
    pub const NAME_SIZE: usize = 32;

    /// Decode the header from the current position of `reader`.
    ///
    /// Multi-byte fields are big-endian. Offsets and type codes are taken as-is;
    /// range checks against the source length happen once the whole file is known.
    pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut name = [0u8; Self::NAME_SIZE];
        reader
            .read_exact(&mut name)
            .map_err(eof_as_truncated("name", Self::NAME_SIZE))?;

        let flags = DatabaseFlags::new(Self::read_u16(reader, "flags")?);
        let version = Self::read_u16(reader, "version")?;
        let creation_time = PalmTimestamp::from_raw(Self::read_u32(reader, "creation_time")?);
        let modification_time = PalmTimestamp::from_raw(Self::read_u32(reader, "modification_time")?);
        let backup_time = PalmTimestamp::from_raw(Self::read_u32(reader, "backup_time")?);
        let modification_number = Self::read_u32(reader, "modification_number")?;
        let app_info_offset = Self::read_u32(reader, "app_info_offset")?;
        let sort_info_offset = Self::read_u32(reader, "sort_info_offset")?;
        let db_type = TypeCode::new(Self::read_u32(reader, "type")?);
        let creator = TypeCode::new(Self::read_u32(reader, "creator")?);
        let unique_id_seed = Self::read_u32(reader, "unique_id_seed")?;
        let next_record_id = Self::read_u32(reader, "next_record_id")?;
        let num_records = Self::read_u16(reader, "num_records")?;

        let header = Header {
            name: decode_latin1_nul_terminated(&name),
            flags,
            version,
            creation_time,
            modification_time,
            backup_time,
            modification_number,
            app_info_offset,
            sort_info_offset,
            db_type,
            creator,
            unique_id_seed,
            next_record_id,
            num_records,
        };

        log::debug!(
            "decoded header: name={:?} type={} creator={} flags=0x{:04X} entries={}",
            header.name,
            header.db_type,
            header.creator,
            header.flags.raw_value(),
            header.num_records
        );

        Ok(header)
    }

    pub fn is_resource_db(&self) -> bool {
        self.flags.is_resource()
    }

    fn read_u16<R: Read + ?Sized>(reader: &mut R, field: &'static str) -> Result<u16> {
        reader.read_u16::<BigEndian>().map_err(eof_as_truncated(field, 2))
    }

    fn read_u32<R: Read + ?Sized>(reader: &mut R, field: &'static str) -> Result<u32> {
        reader.read_u32::<BigEndian>().map_err(eof_as_truncated(field, 4))
    }
}
