//! Bookmark Manager for LearnTube.
//!
//! Implements `BookmarkManagerTrait` — add/remove/list for the bookmark
//! collection of the local library, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::StoreError;
use crate::types::library::Bookmark;

/// Trait defining bookmark operations.
///
/// Every mutation commits synchronously; failures come back as
/// [`StoreError`] rather than aborting anything. `add` never checks for
/// an existing entry with the same URL or title — bookmarking the same
/// video twice yields two independent entries.
pub trait BookmarkManagerTrait {
    fn add(
        &mut self,
        title: &str,
        video_url: &str,
        thumbnail_url: Option<&str>,
    ) -> Result<String, StoreError>;
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Bookmark>, StoreError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            video_url: row.get(2)?,
            thumbnail_url: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Adds a new bookmark. Returns the generated entry ID.
    fn add(
        &mut self,
        title: &str,
        video_url: &str,
        thumbnail_url: Option<&str>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Self::now();

        self.conn
            .execute(
                "INSERT INTO bookmarks (id, title, video_url, thumbnail_url, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, title, video_url, thumbnail_url, now],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Removes a bookmark by ID.
    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Lists all bookmarks in insertion order.
    fn list(&self) -> Result<Vec<Bookmark>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, video_url, thumbnail_url, created_at \
                 FROM bookmarks ORDER BY rowid",
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_bookmark)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StoreError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }
}
