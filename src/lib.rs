//! Pictor: aggregated image search host.
//!
//! This crate wires process-level concerns around the `pictor-search`
//! library:
//!
//! - **Configuration**: TOML file plus provider credentials from the
//!   environment, resolved once at startup
//! - **Logging**: `tracing` subscriber on stderr so stdout stays clean JSON
//! - **Search**: one fan-out over every enabled provider per request
//!
//! The aggregation engine itself lives in [`pictor_search`].

pub mod config;
pub mod error;

pub use config::PictorConfig;
pub use error::{PictorError, Result};
pub use pictor_search::{Aggregator, SearchResult};

/// Run one aggregated search with a fully resolved configuration.
///
/// # Errors
///
/// Returns [`PictorError::Search`] for a blank query, an invalid search
/// config, or when no provider returns any images.
pub async fn run_search(config: &PictorConfig, query: &str) -> Result<SearchResult> {
    let aggregator = Aggregator::from_config(&config.search)?;
    let result = aggregator.search(query).await?;
    if result.is_partial() {
        tracing::info!(
            failed = ?result.errors,
            images = result.images.len(),
            "search completed with partial results"
        );
    }
    Ok(result)
}
