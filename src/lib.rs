//! Bounce Scores - local high score leaderboard for a ball-bouncing game
//!
//! Core modules:
//! - `highscores`: Entry model and the persisted, observable leaderboard
//! - `persistence`: Key-value blob stores (memory, file, LocalStorage)
//! - `observe`: Change notification for the UI layer
//! - `settings`: Storage key and data directory
//! - `web`: JavaScript bindings (wasm32 only)

pub mod highscores;
pub mod observe;
pub mod persistence;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::{LeaderboardEntry, LeaderboardError, LeaderboardStore};
pub use observe::SubscriptionId;
pub use persistence::{BlobStore, MemoryBlobStore, StorageError};
pub use settings::Config;

/// Storage constants
pub mod consts {
    /// Blob key the leaderboard is stored under
    pub const STORAGE_KEY: &str = "HighScores";
}
