// PlacePrep - platform/storage.rs
//
// Key/value persistence abstraction.
// The history store is generic over `StorageBackend` so it can run against
// an in-memory map in tests and the file-backed store in the binary.
// Values are opaque strings; the caller owns the serialisation format.

use crate::util::error::StorageError;
use std::collections::HashMap;

/// A synchronous string blob store addressed by key.
///
/// Implementations must make `write` atomic from the caller's point of view:
/// a later `read` sees either the previous value or the new one, never a
/// partial write.
pub trait StorageBackend {
    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Volatile backend used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value, bypassing any schema. Used to simulate
    /// tampered or legacy data.
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}
