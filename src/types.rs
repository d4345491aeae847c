// src/types.rs
use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Database attribute flags stored in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseFlags(u16);

impl DatabaseFlags {
    pub const RESOURCE: u16 = 0x0001;
    pub const READ_ONLY: u16 = 0x0002;
    pub const APP_INFO_DIRTY: u16 = 0x0004;
    pub const BACKUP: u16 = 0x0008;
    pub const OK_TO_INSTALL_NEWER: u16 = 0x0010;
    pub const RESET_AFTER_INSTALL: u16 = 0x0020;
    pub const STREAM: u16 = 0x0080;
    /// Set when the database was not closed properly
    pub const OPEN: u16 = 0x8000;

    pub fn new(flags: u16) -> Self {
        DatabaseFlags(flags)
    }

    pub fn empty() -> Self {
        DatabaseFlags(0)
    }

    pub fn is_resource(&self) -> bool {
        self.0 & Self::RESOURCE != 0
    }

    pub fn is_read_only(&self) -> bool {
        self.0 & Self::READ_ONLY != 0
    }

    pub fn is_app_info_dirty(&self) -> bool {
        self.0 & Self::APP_INFO_DIRTY != 0
    }

    pub fn wants_backup(&self) -> bool {
        self.0 & Self::BACKUP != 0
    }

    pub fn ok_to_install_newer(&self) -> bool {
        self.0 & Self::OK_TO_INSTALL_NEWER != 0
    }

    pub fn reset_after_install(&self) -> bool {
        self.0 & Self::RESET_AFTER_INSTALL != 0
    }

    pub fn is_stream(&self) -> bool {
        self.0 & Self::STREAM != 0
    }

    pub fn is_open(&self) -> bool {
        self.0 & Self::OPEN != 0
    }

    pub fn raw_value(&self) -> u16 {
        self.0
    }
}

/// Per-record attribute byte: four flag bits over a 4-bit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordAttributes(u8);

impl RecordAttributes {
    /// Protected by the device password
    pub const SECRET: u8 = 0x10;
    pub const BUSY: u8 = 0x20;
    pub const DIRTY: u8 = 0x40;
    pub const DELETE: u8 = 0x80;
    pub const CATEGORY_MASK: u8 = 0x0F;

    pub fn new(attributes: u8) -> Self {
        RecordAttributes(attributes)
    }

    pub fn is_secret(&self) -> bool {
        self.0 & Self::SECRET != 0
    }

    pub fn is_busy(&self) -> bool {
        self.0 & Self::BUSY != 0
    }

    pub fn is_dirty(&self) -> bool {
        self.0 & Self::DIRTY != 0
    }

    pub fn is_deleted(&self) -> bool {
        self.0 & Self::DELETE != 0
    }

    pub fn category(&self) -> u8 {
        self.0 & Self::CATEGORY_MASK
    }

    pub fn raw_value(&self) -> u8 {
        self.0
    }
}

/// Four-character code such as a database type (`TEXt`) or creator (`REAd`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TypeCode(u32);

impl TypeCode {
    pub fn new(value: u32) -> Self {
        TypeCode(value)
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        TypeCode(BigEndian::read_u32(&bytes))
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn raw_value(&self) -> u32 {
        self.0
    }
}

impl From<&[u8; 4]> for TypeCode {
    fn from(bytes: &[u8; 4]) -> Self {
        TypeCode::from_bytes(*bytes)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            write!(f, "'")?;
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            write!(f, "'")
        } else {
            write!(f, "0x{:08X}", self.0)
        }
    }
}

/// Palm OS timestamp (unsigned seconds since 1904-01-01 00:00:00 UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PalmTimestamp {
    pub seconds: u32,
}

impl PalmTimestamp {
    /// Seconds between the Palm epoch (1904) and the Unix epoch (1970)
    pub const EPOCH_OFFSET_SECONDS: i64 = 2_082_844_800;

    pub fn from_raw(seconds: u32) -> Self {
        PalmTimestamp { seconds }
    }

    pub fn from_be_bytes(bytes: &[u8; 4]) -> Self {
        PalmTimestamp {
            seconds: BigEndian::read_u32(bytes),
        }
    }

    /// A zero timestamp is how Palm marks "never" (e.g. a database never backed up).
    pub fn is_unset(&self) -> bool {
        self.seconds == 0
    }

    pub fn to_unix_seconds(&self) -> i64 {
        self.seconds as i64 - Self::EPOCH_OFFSET_SECONDS
    }

    pub fn to_system_time(&self) -> SystemTime {
        let unix_seconds = self.to_unix_seconds();
        if unix_seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(unix_seconds as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(unix_seconds.unsigned_abs())
        }
    }
}
