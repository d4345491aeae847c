// src/reader/shared.rs
use crate::error::Result;
use crate::reader::database::{PalmDatabase, ReadSeek};
use crate::reader::record::RecordCursor;
use bytes::Bytes;
use parking_lot::Mutex;
use std::sync::Arc;

/// A database that can be shared between threads
///
/// Every lookup seeks the underlying source and then reads from it, so the
/// pair runs under one lock. Cursors handed out are independent copies and
/// need no locking.
pub struct SharedDatabase<R: ReadSeek> {
    inner: Arc<Mutex<PalmDatabase<R>>>,
}

impl<R: ReadSeek> Clone for SharedDatabase<R> {
    fn clone(&self) -> Self {
        SharedDatabase {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: ReadSeek> SharedDatabase<R> {
    pub fn new(db: PalmDatabase<R>) -> Self {
        SharedDatabase {
            inner: Arc::new(Mutex::new(db)),
        }
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    pub fn record_count(&self) -> usize {
        self.inner.lock().record_count()
    }

    pub fn record_at(&self, index: usize) -> Result<Bytes> {
        self.inner.lock().record_at(index)
    }

    pub fn record(&self, index: usize) -> Result<RecordCursor> {
        self.inner.lock().record(index)
    }

    /// Run `f` with exclusive access to the database
    pub fn with<T>(&self, f: impl FnOnce(&mut PalmDatabase<R>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl<R: ReadSeek> From<PalmDatabase<R>> for SharedDatabase<R> {
    fn from(db: PalmDatabase<R>) -> Self {
        SharedDatabase::new(db)
    }
}
