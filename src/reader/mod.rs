// src/reader/mod.rs
mod database;
mod record;
mod shared;

pub use database::{OpenOptions, PalmDatabase, ReadSeek, Records};
pub use record::{BigEndianInt, RecordCursor};
pub use shared::SharedDatabase;
