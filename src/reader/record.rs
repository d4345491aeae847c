// src/reader/record.rs
use crate::error::{PdbError, Result};
use crate::types::PalmTimestamp;
use crate::utils::decode_latin1;
use bytes::Bytes;

mod private {
    pub trait Sealed {}
}

/// Integer types that can be read from a record as big-endian values
pub trait BigEndianInt: private::Sealed + Sized + Copy {
    const SIZE: usize;

    fn from_be_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_big_endian_int {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl BigEndianInt for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_be_bytes(buf)
                }
            }
        )*
    };
}

impl_big_endian_int!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Sequential reader over the bytes of one record
///
/// The cursor owns its bytes, so it is independent of the database it came
/// from and of every other cursor. Reads advance the position; a read that
/// would run past the end fails with [`PdbError::Truncated`] and leaves the
/// position where it was.
///
/// # Example
///
/// ```
/// use palmdb_rs::RecordCursor;
///
/// let mut record = RecordCursor::new(vec![0x01, 0x02, b'A', b'B', 0x00]);
/// assert_eq!(record.integer_field::<u16>().unwrap(), 258);
/// assert_eq!(record.string_field().unwrap(), "AB");
/// assert_eq!(record.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordCursor {
    data: Bytes,
    position: usize,
}

impl RecordCursor {
    pub fn new(data: impl Into<Bytes>) -> Self {
        RecordCursor {
            data: data.into(),
            position: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Next byte without advancing
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count, "skip").map(|_| ())
    }

    pub fn integer_field<T: BigEndianInt>(&mut self) -> Result<T> {
        let bytes = self.take(T::SIZE, "integer")?;
        Ok(T::from_be_slice(bytes))
    }

    pub fn u8_field(&mut self) -> Result<u8> {
        self.integer_field()
    }

    pub fn u16_field(&mut self) -> Result<u16> {
        self.integer_field()
    }

    pub fn u32_field(&mut self) -> Result<u32> {
        self.integer_field()
    }

    /// Three-byte big-endian value, the width Palm uses for record unique ids
    pub fn u24_field(&mut self) -> Result<u32> {
        let b = self.take(3, "u24")?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    pub fn timestamp_field(&mut self) -> Result<PalmTimestamp> {
        Ok(PalmTimestamp::from_raw(self.integer_field()?))
    }

    pub fn byte_array_field(&mut self, size: usize) -> Result<Bytes> {
        let start = self.position;
        self.take(size, "byte_array")?;
        Ok(self.data.slice(start..start + size))
    }

    /// NUL-terminated Latin-1 string; the cursor ends up just past the NUL.
    pub fn string_field(&mut self) -> Result<String> {
        let rest = &self.data[self.position..];
        let Some(nul) = rest.iter().position(|&b| b == 0) else {
            return Err(PdbError::Truncated {
                field: "string",
                needed: rest.len() + 1,
            });
        };
        let text = decode_latin1(&rest[..nul]);
        self.position += nul + 1;
        Ok(text)
    }

    fn take(&mut self, count: usize, field: &'static str) -> Result<&[u8]> {
        if count > self.remaining() {
            return Err(PdbError::Truncated { field, needed: count });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..start + count])
    }
}

impl From<Bytes> for RecordCursor {
    fn from(data: Bytes) -> Self {
        RecordCursor::new(data)
    }
}
