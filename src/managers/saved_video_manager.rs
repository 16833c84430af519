//! Saved Video Manager for LearnTube.
//!
//! Implements `SavedVideoManagerTrait` — the downloads collection of the
//! local library. Entries carry denormalized title/url/thumbnail copies
//! plus an optional offline media payload stored as a blob.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::StoreError;
use crate::types::library::SavedVideo;

/// Trait defining saved-video operations.
///
/// Mirrors the bookmark collection's policy: synchronous commits,
/// recoverable [`StoreError`] on failure, and no uniqueness check on
/// URL or title.
pub trait SavedVideoManagerTrait {
    fn save(
        &mut self,
        title: &str,
        video_url: &str,
        thumbnail_url: Option<&str>,
        is_downloaded: bool,
    ) -> Result<String, StoreError>;
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<SavedVideo>, StoreError>;
    /// Lists only entries whose media has actually been cached offline.
    fn list_downloaded(&self) -> Result<Vec<SavedVideo>, StoreError>;
    /// Attaches an offline media payload to an entry and marks it downloaded.
    fn store_media(&mut self, id: &str, bytes: &[u8]) -> Result<(), StoreError>;
    /// Loads the offline media payload, `None` when nothing is cached.
    fn load_media(&self, id: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Saved-video manager backed by a SQLite connection.
pub struct SavedVideoManager<'a> {
    conn: &'a Connection,
}

impl<'a> SavedVideoManager<'a> {
    /// Creates a new `SavedVideoManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a single `SavedVideo` row into a struct. The media blob is
    /// never selected here; it is loaded on demand via `load_media`.
    fn row_to_saved_video(row: &rusqlite::Row) -> rusqlite::Result<SavedVideo> {
        Ok(SavedVideo {
            id: row.get(0)?,
            title: row.get(1)?,
            video_url: row.get(2)?,
            thumbnail_url: row.get(3)?,
            is_downloaded: row.get::<_, i64>(4)? != 0,
            downloaded_at: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

impl<'a> SavedVideoManagerTrait for SavedVideoManager<'a> {
    /// Saves a video to the library. Returns the generated entry ID.
    ///
    /// `downloaded_at` is set only when the entry is created as already
    /// downloaded; otherwise it stays unset until `store_media` runs.
    fn save(
        &mut self,
        title: &str,
        video_url: &str,
        thumbnail_url: Option<&str>,
        is_downloaded: bool,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Self::now();
        let downloaded_at = if is_downloaded { Some(now) } else { None };

        self.conn
            .execute(
                "INSERT INTO saved_videos (id, title, video_url, thumbnail_url, is_downloaded, downloaded_at, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, title, video_url, thumbnail_url, is_downloaded as i64, downloaded_at, now],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Removes a saved video by ID, media payload included.
    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM saved_videos WHERE id = ?1", params![id])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Lists all saved videos in insertion order.
    fn list(&self) -> Result<Vec<SavedVideo>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, video_url, thumbnail_url, is_downloaded, downloaded_at, created_at \
                 FROM saved_videos ORDER BY rowid",
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_saved_video)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StoreError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }

    /// Lists saved videos with cached media, in insertion order.
    fn list_downloaded(&self) -> Result<Vec<SavedVideo>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, video_url, thumbnail_url, is_downloaded, downloaded_at, created_at \
                 FROM saved_videos WHERE is_downloaded = 1 ORDER BY rowid",
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_saved_video)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StoreError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }

    fn store_media(&mut self, id: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let now = Self::now();
        let affected = self
            .conn
            .execute(
                "UPDATE saved_videos SET media = ?1, is_downloaded = 1, downloaded_at = ?2 WHERE id = ?3",
                params![bytes, now, id],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn load_media(&self, id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let media: Option<Option<Vec<u8>>> = self
            .conn
            .query_row(
                "SELECT media FROM saved_videos WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        match media {
            Some(payload) => Ok(payload),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
