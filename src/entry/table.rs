// src/entry/table.rs
use crate::entry::{Entry, RecordEntry, ResourceEntry};
use crate::error::{PdbError, Result};
use crate::header::Header;
use std::io::Read;

/// The entry table that follows the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    entries: Vec<Entry>,
}

impl EntryTable {
    /// Decode `header.num_records` entries from the current position of `reader`
    /// and derive each entry's length. `source_len` is the total byte length of
    /// the database and bounds the last entry.
    pub fn decode<R: Read + ?Sized>(reader: &mut R, header: &Header, source_len: u64) -> Result<Self> {
        let count = header.num_records as usize;
        if count == 0 {
            return Ok(EntryTable::default());
        }

        let mut entries = Vec::with_capacity(count);
        if header.is_resource_db() {
            for _ in 0..count {
                entries.push(Entry::Resource(ResourceEntry::decode(reader)?));
            }
        } else {
            for _ in 0..count {
                entries.push(Entry::Record(RecordEntry::decode(reader)?));
            }
        }

        derive_lengths(&mut entries, source_len)?;

        let table_end = Header::SIZE as u64 + count as u64 * Self::entry_size(header) as u64;
        if (entries[0].offset() as u64) < table_end {
            log::warn!(
                "first entry offset {} overlaps the entry table ending at {}",
                entries[0].offset(),
                table_end
            );
        }
        let empty = entries.iter().filter(|e| e.length() == 0).count();
        if empty > 0 {
            log::warn!("{} of {} entries have zero length", empty, count);
        }
        log::debug!(
            "decoded {} {} entries",
            count,
            if header.is_resource_db() { "resource" } else { "record" }
        );

        Ok(EntryTable { entries })
    }

    pub fn entry_size(header: &Header) -> usize {
        if header.is_resource_db() {
            ResourceEntry::SIZE
        } else {
            RecordEntry::SIZE
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Offset of the first payload, if there are any entries
    pub fn first_offset(&self) -> Option<u32> {
        self.entries.first().map(Entry::offset)
    }
}

/// Fill in `length` for every entry: the gap to the next entry's offset, and
/// for the last entry the distance to the end of the source.
pub fn derive_lengths(entries: &mut [Entry], source_len: u64) -> Result<()> {
    let Some(last) = entries.len().checked_sub(1) else {
        return Ok(());
    };

    for i in 0..last {
        let offset = entries[i].offset();
        let next = entries[i + 1].offset();
        if next < offset {
            return Err(PdbError::InconsistentOffsets {
                offset: next,
                detail: format!("entry {} precedes previous entry offset {}", i + 1, offset),
            });
        }
        entries[i].set_length(next - offset);
    }

    let offset = entries[last].offset();
    if source_len < offset as u64 {
        return Err(PdbError::InconsistentOffsets {
            offset,
            detail: format!("entry {} lies beyond end of source ({} bytes)", last, source_len),
        });
    }
    let length = u32::try_from(source_len - offset as u64).map_err(|_| PdbError::InconsistentOffsets {
        offset,
        detail: format!("entry {} length exceeds 32 bits (source is {} bytes)", last, source_len),
    })?;
    entries[last].set_length(length);

    Ok(())
}
