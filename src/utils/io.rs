// src/utils/io.rs
use crate::error::PdbError;
use std::io::{self, ErrorKind};

/// Map an end-of-stream error to `Truncated` for `field`; anything else stays `Io`.
///
/// ```ignore
/// let flags = reader.read_u16::<BigEndian>().map_err(eof_as_truncated("flags", 2))?;
/// ```
pub fn eof_as_truncated(field: &'static str, needed: usize) -> impl FnOnce(io::Error) -> PdbError {
    move |err| {
        if err.kind() == ErrorKind::UnexpectedEof {
            PdbError::Truncated { field, needed }
        } else {
            PdbError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ReadBytesExt};
    use std::io::{Cursor, Read};

    /// Source that fails every read with the given error kind
    struct Failing(ErrorKind);

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "failing source"))
        }
    }

    #[test]
    fn test_short_read_is_truncated() {
        let mut cursor = Cursor::new(vec![0x01, 0x02, 0x03]);
        match cursor.read_u32::<BigEndian>().map_err(eof_as_truncated("offset", 4)) {
            Err(PdbError::Truncated { field, needed }) => {
                assert_eq!(field, "offset");
                assert_eq!(needed, 4);
            }
            other => panic!("Expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_eof_error_from_source_is_truncated() {
        let err = Failing(ErrorKind::UnexpectedEof)
            .read_u16::<BigEndian>()
            .map_err(eof_as_truncated("flags", 2))
            .unwrap_err();
        assert!(matches!(err, PdbError::Truncated { field: "flags", needed: 2 }));
    }

    #[test]
    fn test_other_errors_stay_io() {
        let err = Failing(ErrorKind::PermissionDenied)
            .read_u16::<BigEndian>()
            .map_err(eof_as_truncated("flags", 2))
            .unwrap_err();
        match err {
            PdbError::Io(e) => assert_eq!(e.kind(), ErrorKind::PermissionDenied),
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}
