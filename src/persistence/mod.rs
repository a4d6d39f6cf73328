//! Key-value blob storage
//!
//! The leaderboard never talks to a concrete storage API directly. It is
//! handed something implementing [`BlobStore`]:
//! - [`MemoryBlobStore`]: in-process map, used by tests and as a fallback
//! - [`FileBlobStore`]: one file per key on native targets
//! - [`LocalStorageBlobStore`]: browser LocalStorage on wasm32

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBlobStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageBlobStore;
pub use memory::MemoryBlobStore;

/// Failure talking to a blob store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistent key-value store holding opaque byte blobs
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
