//! Account sign-up and sign-in for LearnTube.
//!
//! Accounts live in the `users` table with a per-user salt and a PBKDF2
//! password hash; nothing stores or logs a plaintext password. Sign-in
//! deliberately collapses "no such user" and "wrong password" into the
//! same `Ok(false)` so callers cannot tell which usernames exist.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::database::connection::Database;
use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::errors::AuthError;

/// Trait defining account operations.
pub trait AuthServiceTrait {
    /// Registers an account. Fails with `AlreadyExists` when the username
    /// or email is taken. Returns the generated account ID.
    fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<String, AuthError>;

    /// Checks credentials. `Ok(true)` on a match, `Ok(false)` for an
    /// unknown user or a wrong password.
    fn sign_in(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// Account service backed by SQLite.
pub struct AuthService {
    db: Arc<Database>,
    crypto: CryptoService,
}

impl AuthService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            crypto: CryptoService::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Checks whether the username or email is already registered.
    fn account_taken(&self, username: &str, email: &str) -> Result<bool, AuthError> {
        let count: i64 = self
            .db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM users WHERE username = ?1 OR email = ?2",
                params![username, email],
                |row| row.get(0),
            )
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;
        Ok(count > 0)
    }
}

impl AuthServiceTrait for AuthService {
    fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<String, AuthError> {
        if self.account_taken(username, email)? {
            return Err(AuthError::AlreadyExists(username.to_string()));
        }

        let salt = self
            .crypto
            .generate_salt()
            .map_err(|e| AuthError::CryptoError(e.to_string()))?;
        let hash = self
            .crypto
            .hash_password(password, &salt)
            .map_err(|e| AuthError::CryptoError(e.to_string()))?;

        let id = Uuid::new_v4().to_string();
        self.db
            .connection()
            .execute(
                "INSERT INTO users (id, username, email, password_salt, password_hash, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, username, email, salt, hash, Self::now()],
            )
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    fn sign_in(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let row: Option<(Vec<u8>, Vec<u8>)> = self
            .db
            .connection()
            .query_row(
                "SELECT password_salt, password_hash FROM users WHERE username = ?1",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        match row {
            Some((salt, hash)) => Ok(self.crypto.verify_password(password, &salt, &hash)),
            None => Ok(false),
        }
    }
}
