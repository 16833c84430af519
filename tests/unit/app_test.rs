//! Unit tests for the App composition root: wiring, startup, and the
//! notice-publishing conveniences.

use learntube::app::App;
use learntube::config::ApiConfig;
use learntube::managers::bookmark_manager::BookmarkManagerTrait;
use learntube::services::auth_service::AuthServiceTrait;
use learntube::services::preferences::PreferencesStoreTrait;
use learntube::services::theme_service::ThemeServiceTrait;
use learntube::types::events::NoticeLevel;
use learntube::types::theme::Theme;
use learntube::types::video::VideoRecord;

/// Helper: an App over a temp-dir database and preferences file.
fn setup() -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("learntube.db");
    let prefs_path = dir.path().join("preferences.json");
    let app = App::new(
        &db_path.to_string_lossy(),
        ApiConfig::new("test-key"),
        Some(prefs_path.to_string_lossy().to_string()),
    )
    .expect("Failed to build app");
    (dir, app)
}

fn sample_video() -> VideoRecord {
    serde_json::from_value(serde_json::json!({
        "id": "abc",
        "snippet": {
            "title": "Intro to Rust",
            "description": "d",
            "channelTitle": "c",
            "publishedAt": "2024-01-01T00:00:00Z",
            "thumbnails": {
                "medium": {"url": "https://img/m.jpg", "width": 320, "height": 180},
                "high": {"url": "https://img/h.jpg", "width": 480, "height": 360}
            }
        }
    }))
    .unwrap()
}

#[test]
fn test_startup_applies_persisted_theme() {
    let (dir, mut app) = setup();
    app.set_theme(Theme::Dark).unwrap();

    // A fresh app over the same paths picks the theme back up.
    let db_path = dir.path().join("learntube.db");
    let prefs_path = dir.path().join("preferences.json");
    let mut again = App::new(
        &db_path.to_string_lossy(),
        ApiConfig::new("test-key"),
        Some(prefs_path.to_string_lossy().to_string()),
    )
    .unwrap();
    assert_eq!(again.theme.current(), Theme::Light);
    again.startup();
    assert_eq!(again.theme.current(), Theme::Dark);
}

#[test]
fn test_bookmark_video_denormalizes_and_notifies() {
    let (_dir, app) = setup();
    let mut notices = app.notices.subscribe();

    let video = sample_video();
    let id = app.bookmark_video(&video).unwrap();

    let entries = app.bookmarks().list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].title, "Intro to Rust");
    assert_eq!(entries[0].video_url, "https://www.youtube.com/watch?v=abc");
    assert_eq!(entries[0].thumbnail_url.as_deref(), Some("https://img/m.jpg"));

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert!(notice.message.contains("Intro to Rust"));
}

#[test]
fn test_save_video_enters_downloads_collection() {
    use learntube::managers::saved_video_manager::SavedVideoManagerTrait;

    let (_dir, app) = setup();
    let id = app.save_video(&sample_video()).unwrap();

    let entries = app.saved_videos().list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    // Saved for later, not yet cached offline.
    assert!(!entries[0].is_downloaded);
    assert!(app.saved_videos().list_downloaded().unwrap().is_empty());
}

#[test]
fn test_sign_in_records_user_and_failure_notifies() {
    let (_dir, mut app) = setup();
    app.auth
        .sign_up("alice", "alice@example.com", "pw-123456")
        .unwrap();

    let mut notices = app.notices.subscribe();

    assert!(!app.sign_in("alice", "wrong").unwrap());
    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(app.preferences.preferences().logged_in_user.is_none());

    assert!(app.sign_in("alice", "pw-123456").unwrap());
    assert_eq!(
        app.preferences.preferences().logged_in_user.as_deref(),
        Some("alice")
    );

    app.sign_out().unwrap();
    assert!(app.preferences.preferences().logged_in_user.is_none());
}
