//! Wire models for the catalog provider's JSON payloads.
//!
//! List and search responses share one envelope shape; the per-record
//! quirks (dual-shape video ids, optional statistics) are handled by the
//! domain types in [`crate::types::video`]. Pages are decoded as one
//! batch: a single malformed item fails the whole page rather than being
//! dropped from it.

use serde::Deserialize;

use crate::types::video::{CategoryRecord, VideoRecord};

/// Envelope for `/videos` and `/search` responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoRecord>,
    /// Continuation token relayed by the provider. Decoded but not
    /// consumed; there is no pagination surface.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Envelope for `/videoCategories` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub items: Vec<CategoryItem>,
}

/// One category entry as the provider nests it.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryItem {
    pub id: String,
    pub snippet: CategorySnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySnippet {
    pub title: String,
}

impl CategoryItem {
    /// Flattens the provider nesting into the domain record.
    pub fn into_record(self) -> CategoryRecord {
        CategoryRecord {
            id: self.id,
            title: self.snippet.title,
        }
    }
}

/// Provider error envelope attached to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}
