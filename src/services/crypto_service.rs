//! Password hashing for LearnTube accounts.
//!
//! PBKDF2-HMAC-SHA256 with a per-user random salt. Plaintext passwords
//! exist only transiently on the call stack; only the salt and the
//! derived hash are ever stored.

use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;

use crate::types::errors::CryptoError;

/// PBKDF2 iteration count for password hashing.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes.
const SALT_LENGTH: usize = 16;

/// Derived hash length in bytes.
const HASH_LENGTH: usize = 32;

/// Trait defining the password hashing operations.
pub trait CryptoServiceTrait {
    /// Generates a cryptographically secure random salt.
    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError>;

    /// Derives a password hash from a password and salt using PBKDF2.
    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verifies a password against a stored salt and hash in constant time.
    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool;
}

/// Implementation of password hashing using the `ring` crate.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn iterations() -> Result<NonZeroU32, CryptoError> {
        NonZeroU32::new(PBKDF2_ITERATIONS)
            .ok_or_else(|| CryptoError::KeyDerivation("Invalid iteration count".to_string()))
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoServiceTrait for CryptoService {
    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError> {
        let mut salt = vec![0u8; SALT_LENGTH];
        self.rng
            .fill(&mut salt)
            .map_err(|_| CryptoError::RandomGeneration("Failed to generate salt".to_string()))?;
        Ok(salt)
    }

    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut hash = vec![0u8; HASH_LENGTH];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            Self::iterations()?,
            salt,
            password.as_bytes(),
            &mut hash,
        );
        Ok(hash)
    }

    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool {
        let iterations = match Self::iterations() {
            Ok(i) => i,
            Err(_) => return false,
        };
        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            password.as_bytes(),
            expected_hash,
        )
        .is_ok()
    }
}
