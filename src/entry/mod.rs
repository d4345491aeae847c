// src/entry/mod.rs
mod record_entry;
mod resource_entry;
mod table;

pub use record_entry::RecordEntry;
pub use resource_entry::ResourceEntry;
pub use table::{derive_lengths, EntryTable};

/// One row of the entry table. Which variant a database holds is fixed by
/// the header's resource flag, so a table never mixes the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Record(RecordEntry),
    Resource(ResourceEntry),
}

impl Entry {
    pub fn offset(&self) -> u32 {
        match self {
            Entry::Record(e) => e.offset,
            Entry::Resource(e) => e.offset,
        }
    }

    /// Payload length, derived from the next entry's offset (or the source length)
    pub fn length(&self) -> u32 {
        match self {
            Entry::Record(e) => e.length,
            Entry::Resource(e) => e.length,
        }
    }

    pub(crate) fn set_length(&mut self, length: u32) {
        match self {
            Entry::Record(e) => e.length = length,
            Entry::Resource(e) => e.length = length,
        }
    }

    pub fn as_record(&self) -> Option<&RecordEntry> {
        match self {
            Entry::Record(e) => Some(e),
            Entry::Resource(_) => None,
        }
    }

    pub fn as_resource(&self) -> Option<&ResourceEntry> {
        match self {
            Entry::Resource(e) => Some(e),
            Entry::Record(_) => None,
        }
    }
}
