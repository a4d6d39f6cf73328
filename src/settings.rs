//! Leaderboard configuration
//!
//! Where the board lives and under which key. The native binary fills this
//! in from its flags and environment; the web build always uses LocalStorage
//! and only cares about the key.

use std::path::PathBuf;

use crate::consts::STORAGE_KEY;

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = ".bounce-scores";

/// Storage location for a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Blob key the board is stored under
    pub storage_key: String,
    /// Directory for the file store (native only)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    /// Replace the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Replace the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "HighScores");
        assert_eq!(config.data_dir, PathBuf::from(".bounce-scores"));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_storage_key("K")
            .with_data_dir("d");
        assert_eq!(config.storage_key, "K");
        assert_eq!(config.data_dir, PathBuf::from("d"));
    }
}
