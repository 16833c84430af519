//! Feed Manager for LearnTube.
//!
//! Holds the catalog feed state: the current video collection, the
//! category list, the selected category, and the last search text.
//! Every fetch runs as a detached task; its completion replaces the
//! relevant collection and publishes one terminal [`FeedEvent`].
//!
//! There is no cancellation. A superseded request runs to completion and
//! applies its result unconditionally, so when responses arrive out of
//! order the last completion wins and stale results can overwrite newer
//! ones. This matches the behavior the app always had; see DESIGN.md
//! before changing it.

use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;
use tokio::sync::broadcast;

use crate::catalog::client::CatalogClient;
use crate::services::event_bus::EventBus;
use crate::types::errors::FeedError;
use crate::types::events::FeedEvent;
use crate::types::video::{CategoryRecord, VideoRecord};

/// Shared feed state, mutated only from request-completion tasks and the
/// synchronous selection setters.
struct FeedState {
    videos: Vec<VideoRecord>,
    categories: Vec<CategoryRecord>,
    selected_category: usize,
    search_text: String,
}

/// Which video fetch a detached task should run.
enum VideoRequest {
    Trending,
    Search {
        query: String,
        category_id: Option<String>,
    },
}

/// Feed manager over a shared catalog client.
pub struct FeedManager {
    client: Arc<CatalogClient>,
    state: Arc<Mutex<FeedState>>,
    events: EventBus<FeedEvent>,
}

impl FeedManager {
    /// Creates a feed manager with empty collections and default
    /// selection (first category, empty search text).
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(FeedState {
                videos: Vec::new(),
                categories: Vec::new(),
                selected_category: 0,
                search_text: String::new(),
            })),
            events: EventBus::new(32),
        }
    }

    /// Issues the initial categories and trending fetches concurrently.
    ///
    /// The two completions are independent: each replaces its own
    /// collection and publishes its own event, with no barrier between
    /// them.
    pub fn load_initial(&self) {
        self.spawn_categories();
        self.spawn_videos(VideoRequest::Trending);
    }

    /// Records the search text and issues the matching fetch: trending
    /// for empty text, a keyword search otherwise.
    pub fn search(&self, text: &str) {
        lock(&self.state).search_text = text.to_string();
        let request = if text.is_empty() {
            VideoRequest::Trending
        } else {
            VideoRequest::Search {
                query: text.to_string(),
                category_id: None,
            }
        };
        self.spawn_videos(request);
    }

    /// Selects a category by index into the loaded category list and
    /// issues a date-ordered search filtered to it.
    pub fn select_category(&self, index: usize) -> Result<(), FeedError> {
        let category_id = {
            let mut state = lock(&self.state);
            let category = state
                .categories
                .get(index)
                .ok_or(FeedError::InvalidCategoryIndex(index))?;
            let id = category.id.clone();
            state.selected_category = index;
            id
        };
        self.spawn_videos(VideoRequest::Search {
            query: String::new(),
            category_id: Some(category_id),
        });
        Ok(())
    }

    /// Snapshot of the current video collection.
    pub fn videos(&self) -> Vec<VideoRecord> {
        lock(&self.state).videos.clone()
    }

    /// Snapshot of the loaded categories.
    pub fn categories(&self) -> Vec<CategoryRecord> {
        lock(&self.state).categories.clone()
    }

    pub fn selected_category(&self) -> usize {
        lock(&self.state).selected_category
    }

    pub fn search_text(&self) -> String {
        lock(&self.state).search_text.clone()
    }

    /// Subscribes to feed events. Every issued request eventually
    /// publishes exactly one terminal event.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.events.subscribe()
    }

    fn spawn_categories(&self) {
        let client = self.client.clone();
        let state = self.state.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            match client.fetch_categories().await {
                Ok(categories) => {
                    lock(&state).categories = categories;
                    events.publish(FeedEvent::CategoriesUpdated);
                }
                Err(e) => {
                    warn!("category fetch failed: {}", e);
                    events.publish(FeedEvent::FetchFailed(e.to_string()));
                }
            }
        });
    }

    fn spawn_videos(&self, request: VideoRequest) {
        let client = self.client.clone();
        let state = self.state.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = match request {
                VideoRequest::Trending => client.fetch_trending().await,
                VideoRequest::Search { query, category_id } => {
                    client.search(&query, category_id.as_deref()).await
                }
            };
            match result {
                Ok(videos) => {
                    lock(&state).videos = videos;
                    events.publish(FeedEvent::VideosUpdated);
                }
                Err(e) => {
                    // Previously displayed videos stay in place on failure.
                    warn!("video fetch failed: {}", e);
                    events.publish(FeedEvent::FetchFailed(e.to_string()));
                }
            }
        });
    }
}

/// Locks the feed state, recovering the guard if a prior holder panicked.
fn lock(state: &Mutex<FeedState>) -> MutexGuard<'_, FeedState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
