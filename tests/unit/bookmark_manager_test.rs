//! Unit tests for the BookmarkManager public API.
//!
//! Exercises add/remove/list through the `BookmarkManagerTrait`
//! interface, using an in-memory SQLite database.

use learntube::database::Database;
use learntube::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use learntube::types::errors::StoreError;

/// Helper: a fresh in-memory database.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

#[test]
fn test_add_then_list_contains_entry() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr
        .add("Rust book", "https://www.youtube.com/watch?v=abc", Some("https://img/m.jpg"))
        .unwrap();

    let bookmarks = mgr.list().unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].id, id);
    assert_eq!(bookmarks[0].title, "Rust book");
    assert_eq!(bookmarks[0].video_url, "https://www.youtube.com/watch?v=abc");
    assert_eq!(bookmarks[0].thumbnail_url.as_deref(), Some("https://img/m.jpg"));
}

#[test]
fn test_remove_deletes_entry() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr.add("A", "https://example.com/a", None).unwrap();
    mgr.remove(&id).unwrap();

    assert!(mgr.list().unwrap().is_empty());
}

#[test]
fn test_remove_missing_is_not_found() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let err = mgr.remove("no-such-id").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

/// Bookmarking the same video twice yields two independent entries;
/// there is no dedup on URL or title.
#[test]
fn test_duplicate_adds_create_distinct_entries() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let first = mgr.add("Same", "https://example.com/same", None).unwrap();
    let second = mgr.add("Same", "https://example.com/same", None).unwrap();
    assert_ne!(first, second);

    let bookmarks = mgr.list().unwrap();
    assert_eq!(bookmarks.len(), 2);
    assert!(bookmarks.iter().all(|b| b.video_url == "https://example.com/same"));
}

/// Removing one of two duplicate entries leaves the other in place.
#[test]
fn test_remove_targets_one_duplicate() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let first = mgr.add("Same", "https://example.com/same", None).unwrap();
    let second = mgr.add("Same", "https://example.com/same", None).unwrap();

    mgr.remove(&first).unwrap();

    let bookmarks = mgr.list().unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].id, second);
}

/// A failed commit surfaces as a recoverable `StoreError`; it never
/// takes the process down. Dropping the table makes every statement
/// against it fail the way a broken store would.
#[test]
fn test_commit_failure_returns_store_error() {
    let db = setup();
    db.connection().execute_batch("DROP TABLE bookmarks").unwrap();
    let mut mgr = BookmarkManager::new(db.connection());

    let err = mgr.add("Title", "https://example.com/v", None).unwrap_err();
    assert!(matches!(err, StoreError::DatabaseError(_)));

    assert!(matches!(
        mgr.remove("any-id").unwrap_err(),
        StoreError::DatabaseError(_)
    ));
    assert!(matches!(
        mgr.list().unwrap_err(),
        StoreError::DatabaseError(_)
    ));
}

#[test]
fn test_list_preserves_insertion_order() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    for i in 0..5 {
        mgr.add(&format!("Video {}", i), &format!("https://example.com/{}", i), None)
            .unwrap();
    }

    let titles: Vec<String> = mgr.list().unwrap().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Video 0", "Video 1", "Video 2", "Video 3", "Video 4"]);
}
