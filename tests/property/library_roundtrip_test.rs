//! Property-based tests for the local library collections.
//!
//! Verify that for arbitrary valid titles and URLs, adding an entry and
//! listing the collection round-trips the entry; that duplicate adds
//! yield distinct entries (the documented no-dedup policy); and that
//! removal deletes exactly the targeted entry.

use learntube::database::Database;
use learntube::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use learntube::managers::saved_video_manager::{SavedVideoManager, SavedVideoManagerTrait};
use proptest::prelude::*;

/// Strategy for generating watch-page style URLs.
fn arb_url() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{6,11}".prop_map(|id| format!("https://www.youtube.com/watch?v={}", id))
}

/// Strategy for generating non-empty video titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,40}"
}

/// Strategy for an optional thumbnail URL.
fn arb_thumbnail() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z0-9]{4,12}".prop_map(|p| format!("https://img.example.com/{}.jpg", p)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Add-then-list round-trip: the listed entry carries the same
    // title, URL, and thumbnail that were added.
    #[test]
    fn bookmark_add_then_list_roundtrips(
        title in arb_title(),
        url in arb_url(),
        thumbnail in arb_thumbnail(),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = BookmarkManager::new(db.connection());

        let id = manager
            .add(&title, &url, thumbnail.as_deref())
            .expect("add should succeed for valid inputs");

        let entries = manager.list().expect("list should succeed");
        let entry = entries.iter().find(|b| b.id == id)
            .expect("added bookmark must appear in the listing");
        prop_assert_eq!(&entry.title, &title);
        prop_assert_eq!(&entry.video_url, &url);
        prop_assert_eq!(&entry.thumbnail_url, &thumbnail);
    }

    // Duplicate adds of the same URL create two distinct listed entries.
    #[test]
    fn bookmark_duplicates_are_distinct(
        title in arb_title(),
        url in arb_url(),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = BookmarkManager::new(db.connection());

        let first = manager.add(&title, &url, None).unwrap();
        let second = manager.add(&title, &url, None).unwrap();
        prop_assert_ne!(&first, &second);

        let entries = manager.list().unwrap();
        prop_assert_eq!(entries.len(), 2);
        prop_assert!(entries.iter().all(|b| b.video_url == url));
    }

    // Remove deletes exactly the targeted entry and no other.
    #[test]
    fn bookmark_remove_deletes_only_target(
        title_a in arb_title(),
        title_b in arb_title(),
        url in arb_url(),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = BookmarkManager::new(db.connection());

        let keep = manager.add(&title_a, &url, None).unwrap();
        let gone = manager.add(&title_b, &url, None).unwrap();

        manager.remove(&gone).expect("remove should succeed");

        let entries = manager.list().unwrap();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(&entries[0].id, &keep);
    }

    // The saved-videos collection round-trips entries and media the
    // same way, including the downloaded flag.
    #[test]
    fn saved_video_roundtrips_with_media(
        title in arb_title(),
        url in arb_url(),
        payload in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = SavedVideoManager::new(db.connection());

        let id = manager.save(&title, &url, None, false).unwrap();
        manager.store_media(&id, &payload).unwrap();

        let loaded = manager.load_media(&id).unwrap()
            .expect("stored media must load back");
        prop_assert_eq!(loaded, payload);

        let downloaded = manager.list_downloaded().unwrap();
        prop_assert!(downloaded.iter().any(|v| v.id == id));
    }
}
