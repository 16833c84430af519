use serde::{Deserialize, Serialize};

/// A bookmarked catalog video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub created_at: i64,
}

/// A video saved to the local library, optionally with offline media.
///
/// The media payload itself is not carried here; it is loaded on demand
/// through the saved video manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedVideo {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub is_downloaded: bool,
    pub downloaded_at: Option<i64>,
    pub created_at: i64,
}
