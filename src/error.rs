// src/error.rs
use std::io;
use thiserror::Error;

use crate::types::TypeCode;

#[derive(Error, Debug)]
pub enum PdbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Truncated data reading {field}: needed {needed} bytes")]
    Truncated { field: &'static str, needed: usize },

    #[error("Inconsistent offset {offset}: {detail}")]
    InconsistentOffsets { offset: u32, detail: String },

    #[error("Record index {index} out of range (database holds {count} entries)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Database is not a resource database")]
    NotResourceDatabase,

    #[error("Resource not found: {kind} #{id}")]
    ResourceNotFound { kind: TypeCode, id: u16 },
}

impl PdbError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, PdbError::Truncated { .. })
    }
}

pub type Result<T> = std::result::Result<T, PdbError>;
