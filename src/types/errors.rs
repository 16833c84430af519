use std::fmt;

// === TransportError ===

/// Errors surfaced by the provider transport layer.
#[derive(Debug)]
pub enum TransportError {
    /// The request URL could not be constructed.
    InvalidUrl(String),
    /// The response carried no body where one was expected.
    NoData,
    /// The response body did not match the expected shape.
    DecodingError(String),
    /// The response headers arrived but the body could not be read.
    InvalidResponse(String),
    /// The request failed before any response arrived.
    NetworkError(String),
    /// The provider reported an error, or only the status line was available.
    ApiError(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidUrl(url) => write!(f, "Invalid request URL: {}", url),
            TransportError::NoData => write!(f, "Response contained no data"),
            TransportError::DecodingError(msg) => {
                write!(f, "Response decoding failed: {}", msg)
            }
            TransportError::InvalidResponse(msg) => {
                write!(f, "Invalid HTTP response: {}", msg)
            }
            TransportError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TransportError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

// === StoreError ===

/// Errors related to local library storage operations.
#[derive(Debug)]
pub enum StoreError {
    /// Library entry with the given ID was not found.
    NotFound(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Library entry not found: {}", id),
            StoreError::DatabaseError(msg) => write!(f, "Library database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === AuthError ===

/// Errors related to account sign-up and sign-in.
#[derive(Debug)]
pub enum AuthError {
    /// An account with the given username or email already exists.
    AlreadyExists(String),
    /// Database operation failed.
    DatabaseError(String),
    /// Password hashing or verification failed.
    CryptoError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::AlreadyExists(who) => write!(f, "Account already exists: {}", who),
            AuthError::DatabaseError(msg) => write!(f, "Account database error: {}", msg),
            AuthError::CryptoError(msg) => write!(f, "Account crypto error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === CryptoError ===

/// Errors related to cryptographic operations.
#[derive(Debug)]
pub enum CryptoError {
    /// Failed to derive a key from the password.
    KeyDerivation(String),
    /// Failed to generate random bytes.
    RandomGeneration(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for CryptoError {}

// === PreferencesError ===

/// Errors related to preferences persistence.
#[derive(Debug)]
pub enum PreferencesError {
    /// An I/O error occurred while reading or writing preferences.
    IoError(String),
    /// Failed to serialize or deserialize preferences.
    SerializationError(String),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::IoError(msg) => write!(f, "Preferences I/O error: {}", msg),
            PreferencesError::SerializationError(msg) => {
                write!(f, "Preferences serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferencesError {}

// === FeedError ===

/// Errors related to feed state operations.
#[derive(Debug)]
pub enum FeedError {
    /// The provided category index is out of bounds.
    InvalidCategoryIndex(usize),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::InvalidCategoryIndex(index) => {
                write!(f, "Invalid category index: {}", index)
            }
        }
    }
}

impl std::error::Error for FeedError {}

// === ConfigError ===

/// Errors related to API configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The API key is not configured.
    MissingApiKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey(var) => {
                write!(f, "API key not configured: set {}", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
