//! Provider API configuration for LearnTube.

use std::env;
use std::time::Duration;

use crate::types::errors::ConfigError;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "LEARNTUBE_API_KEY";

/// Endpoint root of the catalog provider, no trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

/// Connection settings for the catalog provider.
///
/// Constructed once and handed to whatever needs it; nothing in the crate
/// reads provider settings from globals.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Region used for trending and category listings.
    pub region_code: String,
    /// Page size for list and search requests.
    pub max_results: u32,
    /// Per-request deadline. Requests that exceed it surface as network
    /// errors rather than hanging on a silently inherited default.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config with stock defaults for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            region_code: "US".to_string(),
            max_results: 10,
            timeout: Duration::from_secs(30),
        }
    }

    /// Reads the API key from [`API_KEY_VAR`], keeping every other default.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey(API_KEY_VAR.to_string())),
        }
    }
}
