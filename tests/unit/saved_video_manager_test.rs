//! Unit tests for the SavedVideoManager public API: the downloads
//! collection of the local library, including offline media payloads.

use learntube::database::Database;
use learntube::managers::saved_video_manager::{SavedVideoManager, SavedVideoManagerTrait};
use learntube::types::errors::StoreError;

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

#[test]
fn test_save_then_list() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    let id = mgr
        .save("Lecture 1", "https://www.youtube.com/watch?v=abc", None, false)
        .unwrap();

    let videos = mgr.list().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, id);
    assert_eq!(videos[0].title, "Lecture 1");
    assert!(!videos[0].is_downloaded);
    assert!(videos[0].downloaded_at.is_none());
}

#[test]
fn test_save_downloaded_sets_timestamp() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    let id = mgr
        .save("Lecture 2", "https://example.com/v2", None, true)
        .unwrap();

    let videos = mgr.list().unwrap();
    assert_eq!(videos[0].id, id);
    assert!(videos[0].is_downloaded);
    assert!(videos[0].downloaded_at.is_some());
}

#[test]
fn test_list_downloaded_filters() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    mgr.save("Pending", "https://example.com/a", None, false).unwrap();
    let downloaded = mgr.save("Cached", "https://example.com/b", None, true).unwrap();

    let cached = mgr.list_downloaded().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, downloaded);
}

#[test]
fn test_store_and_load_media() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    let id = mgr
        .save("Offline", "https://example.com/v", None, false)
        .unwrap();
    assert_eq!(mgr.load_media(&id).unwrap(), None);

    let payload = vec![0u8, 1, 2, 3, 255];
    mgr.store_media(&id, &payload).unwrap();

    assert_eq!(mgr.load_media(&id).unwrap(), Some(payload));

    // Storing media flips the downloaded flag.
    let videos = mgr.list().unwrap();
    assert!(videos[0].is_downloaded);
    assert!(videos[0].downloaded_at.is_some());
    assert_eq!(mgr.list_downloaded().unwrap().len(), 1);
}

#[test]
fn test_media_operations_on_missing_entry() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    assert!(matches!(
        mgr.store_media("missing", b"data").unwrap_err(),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        mgr.load_media("missing").unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[test]
fn test_remove_deletes_entry_and_media() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    let id = mgr.save("Gone", "https://example.com/v", None, true).unwrap();
    mgr.store_media(&id, b"payload").unwrap();

    mgr.remove(&id).unwrap();
    assert!(mgr.list().unwrap().is_empty());
    assert!(matches!(
        mgr.load_media(&id).unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[test]
fn test_remove_missing_is_not_found() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());
    assert!(matches!(
        mgr.remove("missing").unwrap_err(),
        StoreError::NotFound(_)
    ));
}

/// A failed commit surfaces as a recoverable `StoreError`, including on
/// the media-payload paths; nothing here may abort the process.
#[test]
fn test_commit_failure_returns_store_error() {
    let db = setup();
    db.connection()
        .execute_batch("DROP TABLE saved_videos")
        .unwrap();
    let mut mgr = SavedVideoManager::new(db.connection());

    let err = mgr
        .save("Title", "https://example.com/v", None, false)
        .unwrap_err();
    assert!(matches!(err, StoreError::DatabaseError(_)));

    assert!(matches!(
        mgr.store_media("any-id", b"payload").unwrap_err(),
        StoreError::DatabaseError(_)
    ));
    assert!(matches!(
        mgr.load_media("any-id").unwrap_err(),
        StoreError::DatabaseError(_)
    ));
    assert!(matches!(
        mgr.list().unwrap_err(),
        StoreError::DatabaseError(_)
    ));
}

/// Duplicate saves of the same video are independent entries, matching
/// the bookmark collection's no-dedup policy.
#[test]
fn test_duplicate_saves_are_independent() {
    let db = setup();
    let mut mgr = SavedVideoManager::new(db.connection());

    let first = mgr.save("Same", "https://example.com/s", None, false).unwrap();
    let second = mgr.save("Same", "https://example.com/s", None, false).unwrap();
    assert_ne!(first, second);
    assert_eq!(mgr.list().unwrap().len(), 2);
}
