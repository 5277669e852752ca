//! # pictor-search
//!
//! Aggregated image search across independent stock-photo providers.
//!
//! One search term is sent to every configured provider at once. Each
//! provider's JSON response is normalised into a shared [`ImageRecord`]
//! shape and the records are concatenated, in provider order, into a
//! single [`SearchResult`].
//!
//! ## Design
//!
//! - Pixabay, Unsplash and Pexels adapters behind the [`ImageProvider`] trait
//! - Concurrent fan-out with a join on every provider (no short-circuit)
//! - Graceful degradation: failed providers become labels in
//!   [`SearchResult::errors`]; the search only fails if all of them fail
//! - Optional deadline covering the whole fan-out
//!
//! ## Security
//!
//! - API keys are never logged and are redacted from `Debug` output
//! - Search queries are logged only at trace level
//! - No caching or persistence of queries or results

pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod providers;
pub mod types;

pub use aggregator::Aggregator;
pub use config::{ProviderSettings, SearchConfig};
pub use error::{Result, SearchError};
pub use provider::{ImageProvider, PAGE_SIZE};
pub use providers::Provider;
pub use types::{ImageRecord, ImageSource, Outcome, ProviderOutcome, SearchResult, UNTITLED};

/// Search every enabled provider concurrently and combine the results.
///
/// Builds the provider set from `config` for this one call. Long-lived
/// callers should build an [`Aggregator`] once with
/// [`Aggregator::from_config`] and reuse it.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] for a blank query (no provider is
/// contacted), [`SearchError::Config`] for an invalid config, and
/// [`SearchError::AllSourcesUnavailable`] if every enabled provider fails.
/// Individual provider failures are logged and listed in
/// [`SearchResult::errors`] without failing the search.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> pictor_search::Result<()> {
/// let config = pictor_search::SearchConfig {
///     pexels: pictor_search::ProviderSettings::new("my-pexels-key"),
///     ..Default::default()
/// };
/// let result = pictor_search::search("cat", &config).await?;
/// for image in &result.images {
///     println!("{} ({}): {}", image.title, image.source, image.preview_url);
/// }
/// for error in &result.errors {
///     eprintln!("{error}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<SearchResult> {
    aggregator::validate_query(query)?;
    Aggregator::from_config(config)?.search(query).await
}
