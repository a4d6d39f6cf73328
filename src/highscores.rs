//! High score leaderboard
//!
//! Entries are kept in the order they were added and the whole list is
//! written back to the blob store after every addition. Storage problems are
//! logged and otherwise ignored: a failed load starts an empty board, a
//! failed save leaves the in-memory board ahead of the stored copy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::STORAGE_KEY;
use crate::observe::{SubscriptionId, Subscribers};
use crate::persistence::{BlobStore, StorageError};

/// Why a load or save did not go through
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("could not decode stored high scores: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode high scores: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not read high scores: {0}")]
    Read(#[source] StorageError),
    #[error("could not write high scores: {0}")]
    Write(#[source] StorageError),
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    id: Uuid,
    /// Player name, not required to be unique
    pub username: String,
    /// Player's score
    pub score: i64,
    /// Level reached
    pub level: i64,
}

impl LeaderboardEntry {
    /// New entry with a freshly generated id
    pub fn new(username: impl Into<String>, score: i64, level: i64) -> Self {
        Self::with_id(Uuid::new_v4(), username, score, level)
    }

    /// Entry with a caller-supplied id
    pub fn with_id(id: Uuid, username: impl Into<String>, score: i64, level: i64) -> Self {
        Self {
            id,
            username: username.into(),
            score,
            level,
        }
    }

    /// Unique id, fixed at creation
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Serialize entries to the stored JSON form
pub fn encode_entries(entries: &[LeaderboardEntry]) -> Result<Vec<u8>, LeaderboardError> {
    serde_json::to_vec(entries).map_err(LeaderboardError::Encode)
}

/// Parse entries from the stored JSON form
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    serde_json::from_slice(bytes).map_err(LeaderboardError::Decode)
}

/// Leaderboard bound to a blob store
pub struct LeaderboardStore<S: BlobStore> {
    store: S,
    key: String,
    entries: Vec<LeaderboardEntry>,
    subscribers: Subscribers<LeaderboardEntry>,
}

impl<S: BlobStore> LeaderboardStore<S> {
    /// Open the leaderboard stored under the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Open the leaderboard stored under `key`
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match load(&store, &key) {
            Ok(Some(entries)) => {
                log::info!("Loaded {} high scores", entries.len());
                entries
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                log::warn!("{e}, starting fresh");
                Vec::new()
            }
        };

        Self {
            store,
            key,
            entries,
            subscribers: Subscribers::new(),
        }
    }

    /// Record a new score at the end of the board and save the board
    pub fn add_entry(&mut self, username: impl Into<String>, score: i64, level: i64) {
        self.entries.push(LeaderboardEntry::new(username, score, level));
        self.subscribers.notify(&self.entries);
        self.save();
    }

    /// Watch the board. The listener is called right away with the current
    /// entries and again after every change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&[LeaderboardEntry]) + 'static,
    ) -> SubscriptionId {
        let id = self.subscribers.subscribe(listener);
        self.subscribers.notify_one(id, &self.entries);
        id
    }

    /// Stop notifying a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Blob key this board is saved under
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn save(&mut self) {
        match persist(&mut self.store, &self.key, &self.entries) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("{e}"),
        }
    }
}

fn load<S: BlobStore>(
    store: &S,
    key: &str,
) -> Result<Option<Vec<LeaderboardEntry>>, LeaderboardError> {
    let Some(bytes) = store.get(key).map_err(LeaderboardError::Read)? else {
        return Ok(None);
    };
    decode_entries(&bytes).map(Some)
}

fn persist<S: BlobStore>(
    store: &mut S,
    key: &str,
    entries: &[LeaderboardEntry],
) -> Result<(), LeaderboardError> {
    let bytes = encode_entries(entries)?;
    store.set(key, &bytes).map_err(LeaderboardError::Write)
}
