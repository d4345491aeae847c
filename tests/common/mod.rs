// tests/common/mod.rs
#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};

/// Builds PDB/PRC images in memory for tests
#[derive(Default)]
pub struct PdbBuilder {
    name: Vec<u8>,
    flags: u16,
    times: [u32; 3],
    db_type: [u8; 4],
    creator: [u8; 4],
    app_info: Vec<u8>,
    records: Vec<(u8, u32, Vec<u8>)>,
    resources: Vec<([u8; 4], u16, Vec<u8>)>,
}

impl PdbBuilder {
    pub fn new(name: &str) -> Self {
        PdbBuilder {
            name: name.as_bytes().to_vec(),
            db_type: *b"DATA",
            creator: *b"test",
            ..Default::default()
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn times(mut self, creation: u32, modification: u32, backup: u32) -> Self {
        self.times = [creation, modification, backup];
        self
    }

    pub fn app_info(mut self, data: &[u8]) -> Self {
        self.app_info = data.to_vec();
        self
    }

    pub fn record(mut self, data: &[u8]) -> Self {
        self.records.push((0, self.records.len() as u32 + 1, data.to_vec()));
        self
    }

    pub fn record_with(mut self, attributes: u8, unique_id: u32, data: &[u8]) -> Self {
        self.records.push((attributes, unique_id, data.to_vec()));
        self
    }

    /// Adding a resource switches the image to a resource database
    pub fn resource(mut self, kind: &[u8; 4], id: u16, data: &[u8]) -> Self {
        self.flags |= 0x0001;
        self.resources.push((*kind, id, data.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let is_resource = !self.resources.is_empty();
        let count = if is_resource { self.resources.len() } else { self.records.len() };
        let entry_size = if is_resource { 10 } else { 8 };
        let table_end = 78 + count * entry_size;
        let app_info_offset = if self.app_info.is_empty() { 0 } else { table_end as u32 };

        let mut buf = Vec::new();
        let mut name = [0u8; 32];
        let n = self.name.len().min(32);
        name[..n].copy_from_slice(&self.name[..n]);
        buf.extend_from_slice(&name);
        buf.write_u16::<BigEndian>(self.flags).unwrap();
        buf.write_u16::<BigEndian>(1).unwrap();
        for t in self.times {
            buf.write_u32::<BigEndian>(t).unwrap();
        }
        buf.write_u32::<BigEndian>(0).unwrap();
        buf.write_u32::<BigEndian>(app_info_offset).unwrap();
        buf.write_u32::<BigEndian>(0).unwrap();
        buf.extend_from_slice(&self.db_type);
        buf.extend_from_slice(&self.creator);
        buf.write_u32::<BigEndian>(0).unwrap();
        buf.write_u32::<BigEndian>(count as u32 + 1).unwrap();
        buf.write_u16::<BigEndian>(count as u16).unwrap();

        let mut offset = (table_end + self.app_info.len()) as u32;
        let mut payload = self.app_info.clone();
        if is_resource {
            for (kind, id, data) in &self.resources {
                buf.extend_from_slice(kind);
                buf.write_u16::<BigEndian>(*id).unwrap();
                buf.write_u32::<BigEndian>(offset).unwrap();
                offset += data.len() as u32;
                payload.extend_from_slice(data);
            }
        } else {
            for (attributes, unique_id, data) in &self.records {
                buf.write_u32::<BigEndian>(offset).unwrap();
                buf.write_u32::<BigEndian>(((*attributes as u32) << 24) | (unique_id & 0xFF_FFFF))
                    .unwrap();
                offset += data.len() as u32;
                payload.extend_from_slice(data);
            }
        }

        buf.extend_from_slice(&payload);
        buf
    }
}
