//! Typed catalog operations over the provider transport.

use std::sync::Arc;

use crate::catalog::models::{CategoryListResponse, VideoListResponse};
use crate::catalog::transport::Transport;
use crate::config::ApiConfig;
use crate::types::errors::TransportError;
use crate::types::video::{CategoryRecord, VideoRecord};

/// Client for the provider's catalog endpoints.
///
/// A thin shaping layer: each operation assembles the endpoint's query
/// parameters, delegates to the [`Transport`], and decodes the page.
/// Records come back in provider-delivered order; nothing is resorted,
/// retried, or cached here.
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    region_code: String,
    max_results: u32,
}

impl CatalogClient {
    /// Creates a client over the given transport, taking region and page
    /// size from the config.
    pub fn new(transport: Arc<dyn Transport>, config: &ApiConfig) -> Self {
        Self {
            transport,
            region_code: config.region_code.clone(),
            max_results: config.max_results,
        }
    }

    /// Fetches the trending chart for the configured region.
    pub async fn fetch_trending(&self) -> Result<Vec<VideoRecord>, TransportError> {
        let params = [
            ("part", "snippet,statistics".to_string()),
            ("chart", "mostPopular".to_string()),
            ("regionCode", self.region_code.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        let value = self.transport.get("videos", &params).await?;
        let page: VideoListResponse = serde_json::from_value(value)
            .map_err(|e| TransportError::DecodingError(e.to_string()))?;
        Ok(page.items)
    }

    /// Fetches the category list for the configured region.
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, TransportError> {
        let params = [
            ("part", "snippet".to_string()),
            ("regionCode", self.region_code.clone()),
        ];
        let value = self.transport.get("videoCategories", &params).await?;
        let page: CategoryListResponse = serde_json::from_value(value)
            .map_err(|e| TransportError::DecodingError(e.to_string()))?;
        Ok(page.items.into_iter().map(|item| item.into_record()).collect())
    }

    /// Searches for videos.
    ///
    /// An empty `query` omits the `q` parameter. A category filter adds
    /// `videoCategoryId` and switches the provider's relevance ordering
    /// to `order=date`. Search payloads carry no statistics; records
    /// decode with `statistics == None`.
    pub async fn search(
        &self,
        query: &str,
        category_id: Option<&str>,
    ) -> Result<Vec<VideoRecord>, TransportError> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("maxResults", self.max_results.to_string()),
        ];
        if !query.is_empty() {
            params.push(("q", query.to_string()));
        }
        if let Some(id) = category_id {
            params.push(("videoCategoryId", id.to_string()));
            params.push(("order", "date".to_string()));
        }
        let value = self.transport.get("search", &params).await?;
        let page: VideoListResponse = serde_json::from_value(value)
            .map_err(|e| TransportError::DecodingError(e.to_string()))?;
        Ok(page.items)
    }
}
