//! App Core for LearnTube.
//!
//! Composition root: constructs one instance of each service and hands
//! out references. Nothing in the crate reaches for a global singleton;
//! everything hangs off this struct.

use std::sync::Arc;

use log::warn;

use crate::catalog::client::CatalogClient;
use crate::catalog::transport::HttpTransport;
use crate::config::ApiConfig;
use crate::database::connection::Database;
use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::feed_manager::FeedManager;
use crate::managers::saved_video_manager::SavedVideoManager;
use crate::services::auth_service::{AuthService, AuthServiceTrait};
use crate::services::event_bus::EventBus;
use crate::services::preferences::{PreferencesStore, PreferencesStoreTrait};
use crate::services::theme_service::{ThemeService, ThemeServiceTrait};
use crate::types::errors::{PreferencesError, StoreError};
use crate::types::events::Notice;
use crate::types::theme::Theme;
use crate::types::video::VideoRecord;

/// Central application struct holding all managers and services.
///
/// BookmarkManager and SavedVideoManager are created on demand via
/// `db.connection()` because they borrow the connection with a lifetime
/// parameter; use the `bookmarks()` / `saved_videos()` accessors.
pub struct App {
    pub db: Arc<Database>,
    pub catalog: Arc<CatalogClient>,
    pub feed: FeedManager,
    pub auth: AuthService,
    pub preferences: PreferencesStore,
    pub theme: ThemeService,
    /// Bus for transient user-facing notices (sign-in failures,
    /// bookmark confirmations). Rendering them is the caller's concern.
    pub notices: EventBus<Notice>,
}

impl App {
    /// Creates a new App over the database at `db_path`, talking to the
    /// provider described by `config`. Preferences go to the platform
    /// config dir unless `preferences_path` overrides it.
    pub fn new(
        db_path: &str,
        config: ApiConfig,
        preferences_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let transport = HttpTransport::new(&config)?;
        let catalog = Arc::new(CatalogClient::new(Arc::new(transport), &config));
        let feed = FeedManager::new(catalog.clone());
        let auth = AuthService::new(db.clone());
        let preferences = PreferencesStore::new(preferences_path);
        let theme = ThemeService::new(Theme::default());
        let notices = EventBus::new(16);

        Ok(Self {
            db,
            catalog,
            feed,
            auth,
            preferences,
            theme,
            notices,
        })
    }

    /// Startup sequence: load persisted preferences and apply the saved
    /// theme. A missing preferences file is normal; a corrupt one is
    /// logged and defaults stay in effect.
    pub fn startup(&mut self) {
        match self.preferences.load() {
            Ok(prefs) => self.theme.apply(prefs.theme),
            Err(e) => warn!("preferences load failed, using defaults: {}", e),
        }
    }

    /// Bookmark collection over the shared connection.
    pub fn bookmarks(&self) -> BookmarkManager<'_> {
        BookmarkManager::new(self.db.connection())
    }

    /// Saved-video collection over the shared connection.
    pub fn saved_videos(&self) -> SavedVideoManager<'_> {
        SavedVideoManager::new(self.db.connection())
    }

    /// Bookmarks a catalog video, denormalizing its title, watch URL,
    /// and thumbnail into the library, and publishes a success notice.
    pub fn bookmark_video(&self, video: &VideoRecord) -> Result<String, StoreError> {
        use crate::managers::bookmark_manager::BookmarkManagerTrait;
        let thumbnail = video.snippet.thumbnails.medium.url.clone();
        let id = self
            .bookmarks()
            .add(&video.snippet.title, &video.watch_url(), Some(&thumbnail))?;
        self.notices
            .publish(Notice::success(format!("Bookmarked \"{}\"", video.snippet.title)));
        Ok(id)
    }

    /// Adds a catalog video to the downloads collection (metadata only;
    /// the media payload is attached later) and publishes a notice.
    pub fn save_video(&self, video: &VideoRecord) -> Result<String, StoreError> {
        use crate::managers::saved_video_manager::SavedVideoManagerTrait;
        let thumbnail = video.snippet.thumbnails.medium.url.clone();
        let id = self
            .saved_videos()
            .save(&video.snippet.title, &video.watch_url(), Some(&thumbnail), false)?;
        self.notices
            .publish(Notice::success(format!("Saved \"{}\"", video.snippet.title)));
        Ok(id)
    }

    /// Switches the theme, persisting the choice and broadcasting it.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferencesError> {
        self.theme.set_theme(theme, &mut self.preferences)
    }

    /// Signs in and, on success, records the username in preferences.
    pub fn sign_in(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let ok = self.auth.sign_in(username, password)?;
        if ok {
            self.preferences
                .set_logged_in_user(Some(username.to_string()))?;
        } else {
            self.notices
                .publish(Notice::error("Invalid username or password"));
        }
        Ok(ok)
    }

    /// Clears the persisted sign-in flag.
    pub fn sign_out(&mut self) -> Result<(), PreferencesError> {
        self.preferences.set_logged_in_user(None)
    }
}
