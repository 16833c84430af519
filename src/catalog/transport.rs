//! HTTP transport for the catalog provider.
//!
//! A single GET primitive with uniform error mapping: every catalog
//! operation goes through [`Transport::get`], which returns the decoded
//! JSON body or one of the [`TransportError`] variants. The provider API
//! key is appended to every request here so callers never handle it.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use serde_json::Value;

use crate::catalog::models::ApiErrorEnvelope;
use crate::config::ApiConfig;
use crate::types::errors::TransportError;

/// Trait defining the provider transport interface.
///
/// The async fn returns exactly once per call; there is no callback that
/// can fire zero or multiple times.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET against `endpoint` (a path relative to the base URL)
    /// with the given query parameters and decodes the JSON body.
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, TransportError>;
}

/// Transport implementation over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Creates a transport from the API configuration.
    ///
    /// The request timeout comes from the config rather than the HTTP
    /// client's own default, so the deadline is explicit and documented.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::NetworkError(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a transport around an existing client. Used by tests to
    /// inject a client with non-default settings.
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, TransportError> {
        let url = build_url(&self.base_url, endpoint, params, &self.api_key)?;
        debug!("GET {} ({} params)", endpoint, params.len());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        let result = decode_body(status.as_u16(), &body);
        if let Err(err) = &result {
            warn!("GET {} failed: {}", endpoint, err);
        }
        result
    }
}

/// Maps a response status and body to the decoded JSON value or the
/// matching error: the provider envelope (or status fallback) for
/// non-2xx, `NoData` for an empty success body, `DecodingError` for a
/// body that is not JSON.
pub fn decode_body(status: u16, body: &[u8]) -> Result<Value, TransportError> {
    if !(200..300).contains(&status) {
        return Err(error_for_status(status, body));
    }
    if body.is_empty() {
        return Err(TransportError::NoData);
    }
    serde_json::from_slice(body).map_err(|e| TransportError::DecodingError(e.to_string()))
}

/// Joins the base URL, endpoint path, caller parameters, and the API key
/// into a request URL. All parameter values are strings on the wire;
/// numeric parameters are stringified by the caller.
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    params: &[(&str, String)],
    api_key: &str,
) -> Result<Url, TransportError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    let mut url =
        Url::parse(&joined).map_err(|_| TransportError::InvalidUrl(joined.clone()))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
        pairs.append_pair("key", api_key);
    }
    Ok(url)
}

/// Maps a non-2xx response to an error. A decodable provider envelope
/// yields its message; anything else falls back to the status line.
pub fn error_for_status(status: u16, body: &[u8]) -> TransportError {
    match serde_json::from_slice::<ApiErrorEnvelope>(body) {
        Ok(envelope) => TransportError::ApiError(envelope.error.message),
        Err(_) => TransportError::ApiError(format!("Status code: {}", status)),
    }
}
