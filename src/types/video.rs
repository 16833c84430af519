use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog video as returned by the provider.
///
/// The provider sends the `id` as a bare string on list endpoints and as an
/// object carrying a `videoId` field on search endpoints; both shapes decode
/// to the same flat string here. An id of neither shape, or one that is
/// empty, fails the decode of the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(deserialize_with = "video_id")]
    pub id: String,
    pub snippet: VideoSnippet,
    /// Absent on search payloads and tolerated when malformed.
    #[serde(default, deserialize_with = "lenient_statistics")]
    pub statistics: Option<VideoStatistics>,
}

impl VideoRecord {
    /// Canonical watch page URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// Descriptive fields of a catalog video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub thumbnails: Thumbnails,
}

/// Thumbnail variants offered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnails {
    pub medium: ThumbnailRef,
    pub high: ThumbnailRef,
}

/// A single thumbnail image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Engagement counters, numeric-as-string as the provider sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

/// A video category usable as a search filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub title: String,
}

/// Accepts `"abc"` or `{"videoId": "abc"}` and normalizes to `"abc"`.
fn video_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Plain(String),
        Keyed {
            #[serde(rename = "videoId")]
            video_id: String,
        },
    }

    let id = match RawId::deserialize(deserializer)? {
        RawId::Plain(id) => id,
        RawId::Keyed { video_id } => video_id,
    };
    if id.is_empty() {
        return Err(serde::de::Error::custom("empty video id"));
    }
    Ok(id)
}

/// Maps a malformed `statistics` object to `None` instead of failing the
/// record, matching how tolerant clients treat this block.
fn lenient_statistics<'de, D>(deserializer: D) -> Result<Option<VideoStatistics>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
