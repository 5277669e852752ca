//! Shared HTTP client construction for provider requests.
//!
//! Every adapter built from one [`SearchConfig`] shares a single
//! [`reqwest::Client`], so connection pools are reused across the fan-out.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("pictor-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for provider API calls.
///
/// The client has:
/// - Timeout from config (a timed-out request fails only its own provider)
/// - Custom User-Agent if configured, [`DEFAULT_USER_AGENT`] otherwise
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Send a prepared GET request and decode its JSON body.
///
/// Non-2xx statuses become [`SearchError::Http`]; an undecodable body
/// becomes [`SearchError::Parse`]. `provider` prefixes every message.
/// Request URLs are stripped from errors since some providers take the
/// API key as a query parameter.
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, SearchError> {
    let response = request
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("{provider} request failed: {}", e.without_url())))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("{provider} HTTP error: {}", e.without_url())))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| {
            SearchError::Http(format!("{provider} response read failed: {}", e.without_url()))
        })?;

    tracing::trace!(provider, bytes = body.len(), "provider response received");

    serde_json::from_slice(&body)
        .map_err(|e| SearchError::Parse(format!("{provider} response malformed: {e}")))
}
