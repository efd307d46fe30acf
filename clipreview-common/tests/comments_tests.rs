//! Unit tests for the CSV-backed comment store

use clipreview_common::comments::{CommentStore, COMMENTS_FILE};
use std::fs;
use tempfile::TempDir;

#[test]
fn open_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let store_dir = dir.path().join("nested").join("comments");

    let store = CommentStore::open(&store_dir).unwrap();
    assert!(store_dir.is_dir());
    assert!(store.is_empty());
}

#[test]
fn save_writes_live_file_and_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut store = CommentStore::open(dir.path()).unwrap();

    store.upsert("a0.avi", "blurry apical view");
    let snapshot = store.save().unwrap();

    let live = fs::read_to_string(dir.path().join(COMMENTS_FILE)).unwrap();
    assert!(live.starts_with("filename,comments\n"));
    assert!(live.contains("a0.avi,blurry apical view"));

    let snapshot_name = snapshot.file_name().unwrap().to_string_lossy().to_string();
    assert!(snapshot_name.starts_with("comments_"));
    assert!(snapshot_name.ends_with(".csv"));
    assert_eq!(fs::read_to_string(&snapshot).unwrap(), live);
}

#[test]
fn save_with_no_entries_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let store = CommentStore::open(dir.path()).unwrap();

    store.save().unwrap();

    let live = fs::read_to_string(dir.path().join(COMMENTS_FILE)).unwrap();
    assert_eq!(live, "filename,comments\n");
}

#[test]
fn upsert_overwrites_existing_entry() {
    let dir = TempDir::new().unwrap();
    let mut store = CommentStore::open(dir.path()).unwrap();

    store.upsert("a0.avi", "first pass");
    store.upsert("a1.avi", "ok");
    store.upsert("a0.avi", "second pass");

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("a0.avi"), Some("second pass"));
    assert_eq!(store.get("a1.avi"), Some("ok"));
}

#[test]
fn reopen_loads_persisted_entries() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = CommentStore::open(dir.path()).unwrap();
        store.upsert("a0.avi", "needs review, low contrast");
        store.upsert("a1.avi", "");
        store.save().unwrap();
    }

    let store = CommentStore::open(dir.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.contains("a0.avi"));
    assert_eq!(store.get("a0.avi"), Some("needs review, low contrast"));
    // Empty comments are values, not absences
    assert!(store.contains("a1.avi"));
    assert_eq!(store.get("a1.avi"), Some(""));
    assert!(!store.contains("a2.avi"));
}

#[test]
fn persisted_order_is_insertion_order() {
    let dir = TempDir::new().unwrap();
    let mut store = CommentStore::open(dir.path()).unwrap();

    store.upsert("z.avi", "last alphabetically, first inserted");
    store.upsert("a.avi", "second inserted");
    store.upsert("z.avi", "updated in place");
    store.save().unwrap();

    let live = fs::read_to_string(dir.path().join(COMMENTS_FILE)).unwrap();
    let lines: Vec<&str> = live.lines().collect();
    assert_eq!(lines[0], "filename,comments");
    assert!(lines[1].starts_with("z.avi,"));
    assert!(lines[2].starts_with("a.avi,"));
}

#[test]
fn comments_with_commas_round_trip() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = CommentStore::open(dir.path()).unwrap();
        store.upsert("a0.avi", "noisy, probably mislabeled, recheck \"split\"");
        store.save().unwrap();
    }

    let store = CommentStore::open(dir.path()).unwrap();
    assert_eq!(
        store.get("a0.avi"),
        Some("noisy, probably mislabeled, recheck \"split\"")
    );
}
