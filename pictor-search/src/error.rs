//! Error types for the pictor-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.

/// Errors that can occur during an aggregated image search.
///
/// Only [`SearchError::EmptyQuery`], [`SearchError::AllSourcesUnavailable`]
/// and [`SearchError::Config`] ever reach the caller of
/// [`crate::Aggregator::search`]. The remaining variants describe a single
/// provider's fault and are folded into a failure label by the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search term was empty or whitespace. No provider was queried.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// No provider returned any images, usually because every one failed.
    #[error("failed to fetch images from all sources: {0}")]
    AllSourcesUnavailable(String),

    /// A provider has no API key configured.
    #[error("missing API key for {0}")]
    MissingCredential(String),

    /// An HTTP request to a provider failed or returned a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A provider did not settle before the fan-out deadline.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for pictor-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
