//! Browser LocalStorage blob store (wasm32 only)

use web_sys::Storage;

use super::{BlobStore, StorageError};

/// Blob store on top of `window.localStorage`
///
/// LocalStorage only holds strings, so blobs must be UTF-8 (the JSON the
/// leaderboard writes always is).
pub struct LocalStorageBlobStore {
    storage: Storage,
}

impl LocalStorageBlobStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl BlobStore for LocalStorageBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.storage
            .get_item(key)
            .map(|item| item.map(String::into_bytes))
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let text = std::str::from_utf8(value)
            .map_err(|e| StorageError::Backend(format!("blob is not UTF-8: {e}")))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}
