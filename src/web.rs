//! JavaScript bindings
//!
//! Exposes the leaderboard to the page. Storage is LocalStorage when the
//! browser allows it, otherwise an in-memory store for the session.

use wasm_bindgen::prelude::*;

use crate::highscores::{LeaderboardEntry, LeaderboardStore};
use crate::observe::SubscriptionId;
use crate::persistence::{BlobStore, LocalStorageBlobStore, MemoryBlobStore};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_json(entries: &[LeaderboardEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub struct WebLeaderboard {
    board: LeaderboardStore<Box<dyn BlobStore>>,
}

#[wasm_bindgen]
impl WebLeaderboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebLeaderboard {
        let store: Box<dyn BlobStore> = match LocalStorageBlobStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{e}, high scores will not survive a reload");
                Box::new(MemoryBlobStore::new())
            }
        };
        WebLeaderboard {
            board: LeaderboardStore::new(store),
        }
    }

    /// Record a score. `score` and `level` arrive from JS as `BigInt`.
    pub fn add_entry(&mut self, username: String, score: i64, level: i64) {
        self.board.add_entry(username, score, level);
    }

    /// Current entries as a JSON array
    pub fn entries_json(&self) -> String {
        to_json(self.board.entries())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.board.len()
    }

    /// Call `callback` with the entries JSON now and after every change.
    /// Returns the id to pass to `unsubscribe`.
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u64 {
        self.board
            .subscribe(move |entries| {
                let json = JsValue::from_str(&to_json(entries));
                if let Err(e) = callback.call1(&JsValue::NULL, &json) {
                    log::warn!("Leaderboard listener threw: {e:?}");
                }
            })
            .as_u64()
    }

    /// Drop a callback registered with `subscribe`
    pub fn unsubscribe(&mut self, id: u64) -> bool {
        self.board.unsubscribe(SubscriptionId::from_u64(id))
    }
}

impl Default for WebLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}
