// src/lib.rs
//! # palmdb-rs
//!
//! A Rust library for reading Palm OS database container files: record
//! databases (`.pdb`) and resource databases (`.prc`).
//!
//! A database file is a fixed 78-byte header, a table of entry descriptors,
//! and the payload bytes. Entry lengths are not stored on disk; they are
//! derived from neighbouring offsets and the size of the file.
//!
//! ## Features
//!
//! - **Lazy payloads**: the header and entry table are decoded on open,
//!   record bytes are read only when asked for
//! - **Owned records**: every record comes back as its own copy, so cursors
//!   never alias the source
//! - **Typed fields**: big-endian integers, NUL-terminated Latin-1 strings,
//!   byte arrays and Palm timestamps via [`RecordCursor`]
//! - **Resource databases**: lookup by type code and id
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use palmdb_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut db = PalmDatabase::open("MemoDB.pdb")?;
//!     println!("{}: {} records", db.name(), db.record_count());
//!
//!     for record in db.records() {
//!         let mut record = record?;
//!         if !record.is_empty() {
//!             println!("{}", record.string_field()?);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Reading from memory
//!
//! ```rust,no_run
//! use palmdb_rs::*;
//! use std::io::Cursor;
//!
//! fn main() -> Result<()> {
//!     let bytes = std::fs::read("Launcher.prc")?;
//!     let mut db = PalmDatabase::from_reader(Cursor::new(bytes))?;
//!     let code = db.resource(TypeCode::from(b"code"), 1)?;
//!     println!("code #1 is {} bytes", code.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod header;
pub mod entry;
pub mod reader;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{PdbError, Result};

pub use types::{
    DatabaseFlags,
    PalmTimestamp,
    RecordAttributes,
    TypeCode,
};

pub use header::Header;

pub use entry::{
    Entry,
    EntryTable,
    RecordEntry,
    ResourceEntry,
};

pub use reader::{
    BigEndianInt,
    OpenOptions,
    PalmDatabase,
    RecordCursor,
    Records,
    SharedDatabase,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use palmdb_rs::prelude::*;
    //! ```

    pub use crate::error::{PdbError, Result};
    pub use crate::reader::{PalmDatabase, RecordCursor};
    pub use crate::types::{PalmTimestamp, TypeCode};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(Header::SIZE, 78);
        assert_eq!(Header::NAME_SIZE, 32);
        assert_eq!(RecordEntry::SIZE, 8);
        assert_eq!(ResourceEntry::SIZE, 10);
        assert_eq!(PalmTimestamp::EPOCH_OFFSET_SECONDS, 2_082_844_800);
    }

    #[test]
    fn test_error_messages() {
        let err = PdbError::IndexOutOfRange { index: 3, count: 3 };
        assert_eq!(
            err.to_string(),
            "Record index 3 out of range (database holds 3 entries)"
        );

        let err = PdbError::ResourceNotFound {
            kind: TypeCode::from(b"tAIN"),
            id: 1000,
        };
        assert_eq!(err.to_string(), "Resource not found: 'tAIN' #1000");
    }
}
