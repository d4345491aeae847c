// src/reader/database.rs
use crate::entry::{Entry, EntryTable};
use crate::error::{PdbError, Result};
use crate::header::Header;
use crate::reader::record::RecordCursor;
use crate::types::TypeCode;
use crate::utils::eof_as_truncated;
use bytes::Bytes;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(any(feature = "mmap", feature = "async"))]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Options controlling how strictly a database is validated on open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    /// Fail the open when a nonzero app-info or sort-info offset lies past the
    /// end of the source. When false the problem is only logged.
    pub strict_info_offsets: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        OpenOptions {
            strict_info_offsets: true,
        }
    }
}

/// A Palm OS database (PDB or PRC) opened for reading
///
/// The header and entry table are decoded once on open; payloads are read
/// lazily from the source on each lookup, and every lookup returns its own
/// copy of the bytes.
pub struct PalmDatabase<R: ReadSeek> {
    source: R,
    source_len: u64,
    header: Header,
    entries: EntryTable,
}

/// Constructor for standard file I/O
impl PalmDatabase<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(65536, file))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl PalmDatabase<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_reader(Cursor::new(mmap))
    }
}

/// Constructor that loads the file asynchronously (requires "async" feature)
#[cfg(feature = "async")]
impl PalmDatabase<Cursor<Vec<u8>>> {
    pub async fn open_async(path: impl AsRef<Path>) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: ReadSeek> PalmDatabase<R> {
    pub fn from_reader(source: R) -> Result<Self> {
        Self::from_reader_with(source, OpenOptions::default())
    }

    pub fn from_reader_with(mut source: R, options: OpenOptions) -> Result<Self> {
        let source_len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;

        let header = Header::decode(&mut source)?;
        let entries = EntryTable::decode(&mut source, &header, source_len)?;

        for (field, offset) in [
            ("app_info_offset", header.app_info_offset),
            ("sort_info_offset", header.sort_info_offset),
        ] {
            if offset != 0 && offset as u64 > source_len {
                if options.strict_info_offsets {
                    return Err(PdbError::InconsistentOffsets {
                        offset,
                        detail: format!("{} lies beyond end of source ({} bytes)", field, source_len),
                    });
                }
                log::warn!("{} {} lies beyond end of source ({} bytes)", field, offset, source_len);
            }
        }

        Ok(PalmDatabase {
            source,
            source_len,
            header,
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn record_count(&self) -> usize {
        self.entries.len()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn is_resource_db(&self) -> bool {
        self.header.is_resource_db()
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.entries()
    }

    pub fn entry(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(PdbError::IndexOutOfRange {
            index,
            count: self.entries.len(),
        })
    }

    /// Total byte length of the source, measured on open
    pub fn source_len(&self) -> u64 {
        self.source_len
    }

    /// Raw bytes of the record (or resource) at `index`
    pub fn record_at(&mut self, index: usize) -> Result<Bytes> {
        let (offset, length) = {
            let entry = self.entry(index)?;
            (entry.offset(), entry.length())
        };
        log::debug!("reading entry {} at offset {} ({} bytes)", index, offset, length);
        self.read_range(offset, length, "record")
    }

    /// Sequential cursor over the record at `index`
    pub fn record(&mut self, index: usize) -> Result<RecordCursor> {
        self.record_at(index).map(RecordCursor::new)
    }

    pub fn records(&mut self) -> Records<'_, R> {
        Records { db: self, next: 0 }
    }

    /// Payload of the resource with the given type and id
    pub fn resource(&mut self, kind: TypeCode, id: u16) -> Result<Bytes> {
        if !self.is_resource_db() {
            return Err(PdbError::NotResourceDatabase);
        }
        let index = self
            .entries
            .iter()
            .position(|e| matches!(e, Entry::Resource(r) if r.kind == kind && r.id == id))
            .ok_or(PdbError::ResourceNotFound { kind, id })?;
        self.record_at(index)
    }

    /// The application info block, if the header points to one. It runs up to
    /// the sort info block, the first payload, or the end of the source,
    /// whichever comes first.
    pub fn app_info_block(&mut self) -> Result<Option<Bytes>> {
        let start = self.header.app_info_offset;
        if start == 0 {
            return Ok(None);
        }
        let sort = Some(self.header.sort_info_offset).filter(|&o| o != 0);
        let end = self.block_end(start, sort);
        self.read_range(start, end - start, "app_info").map(Some)
    }

    /// The sort info block, if the header points to one
    pub fn sort_info_block(&mut self) -> Result<Option<Bytes>> {
        let start = self.header.sort_info_offset;
        if start == 0 {
            return Ok(None);
        }
        let end = self.block_end(start, None);
        self.read_range(start, end - start, "sort_info").map(Some)
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    fn block_end(&self, start: u32, next_block: Option<u32>) -> u32 {
        let source_end = u32::try_from(self.source_len).unwrap_or(u32::MAX);
        [next_block, self.entries.first_offset()]
            .into_iter()
            .flatten()
            .filter(|&o| o > start)
            .fold(source_end.max(start), u32::min)
    }

    fn read_range(&mut self, offset: u32, length: u32, field: &'static str) -> Result<Bytes> {
        let end = offset as u64 + length as u64;
        if end > self.source_len {
            return Err(PdbError::Truncated {
                field,
                needed: length as usize,
            });
        }

        self.source.seek(SeekFrom::Start(offset as u64))?;
        let mut data = vec![0u8; length as usize];
        self.source
            .read_exact(&mut data)
            .map_err(eof_as_truncated(field, length as usize))?;
        Ok(Bytes::from(data))
    }
}

/// Iterator over every record of a database, in table order
pub struct Records<'a, R: ReadSeek> {
    db: &'a mut PalmDatabase<R>,
    next: usize,
}

impl<'a, R: ReadSeek> Iterator for Records<'a, R> {
    type Item = Result<RecordCursor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.db.record_count() {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.db.record(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.db.record_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<'a, R: ReadSeek> ExactSizeIterator for Records<'a, R> {}
