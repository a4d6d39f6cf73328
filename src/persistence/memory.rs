//! In-memory blob store

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{BlobStore, StorageError};

#[derive(Debug, Default)]
struct Inner {
    blobs: HashMap<String, Vec<u8>>,
    unavailable: bool,
}

/// Blob store backed by a `HashMap`
///
/// Clones share the same map, so a second store instance built from a clone
/// sees everything written through the first one (like reopening a real
/// store after a restart).
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryBlobStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle availability; while unavailable every read and write fails
    pub fn set_available(&self, available: bool) {
        self.inner.borrow_mut().unavailable = !available;
    }

    /// Raw blob under `key`, bypassing availability
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.borrow().blobs.get(key).cloned()
    }

    /// Put a raw blob under `key`, bypassing availability
    pub fn insert_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.inner
            .borrow_mut()
            .blobs
            .insert(key.to_string(), value.into());
    }

    /// Number of keys holding a blob
    pub fn len(&self) -> usize {
        self.inner.borrow().blobs.len()
    }

    /// Check if nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        inner.blobs.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryBlobStore::new();
        assert!(store.get("HighScores").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryBlobStore::new();
        store.set("k", b"one").unwrap();
        store.set("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"two"[..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_blobs() {
        let mut a = MemoryBlobStore::new();
        let b = a.clone();
        a.set("k", b"shared").unwrap();
        assert_eq!(b.raw("k"), Some(b"shared".to_vec()));
    }

    #[test]
    fn test_unavailable_rejects_reads_and_writes() {
        let mut store = MemoryBlobStore::new();
        store.insert_raw("k", "x");
        store.set_available(false);
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set("k", b"y"), Err(StorageError::Unavailable)));
        // Untouched while down
        assert_eq!(store.raw("k"), Some(b"x".to_vec()));

        store.set_available(true);
        store.set("k", b"y").unwrap();
        assert_eq!(store.raw("k"), Some(b"y".to_vec()));
    }
}
