#![cfg(not(target_arch = "wasm32"))]

use bounce_scores::LeaderboardStore;
use bounce_scores::persistence::FileBlobStore;

#[test]
fn test_board_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut board = LeaderboardStore::new(FileBlobStore::open(dir.path()).unwrap());
    board.add_entry("alice", 120, 3);
    board.add_entry("bob", 95, 2);
    drop(board);

    let board = LeaderboardStore::new(FileBlobStore::open(dir.path()).unwrap());
    let names: Vec<_> = board.entries().iter().map(|e| e.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("HighScores.json"), b"\xff\xfe garbage").unwrap();

    let mut board = LeaderboardStore::new(FileBlobStore::open(dir.path()).unwrap());
    assert!(board.is_empty());

    // Next save replaces the garbage
    board.add_entry("carol", 7, 1);
    let reopened = LeaderboardStore::new(FileBlobStore::open(dir.path()).unwrap());
    assert_eq!(reopened.len(), 1);
}
