//! Error types for the pictor host.

use pictor_search::SearchError;

/// Top-level error type for the pictor host process.
#[derive(Debug, thiserror::Error)]
pub enum PictorError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search failed as a whole (blank query or no images from any provider).
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PictorError>;
