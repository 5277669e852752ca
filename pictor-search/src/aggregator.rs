//! Fan-out aggregator: concurrent provider queries joined into one result.
//!
//! Every provider is queried at once and the aggregator waits for all of
//! them to settle. A failing provider never cancels its siblings; its
//! failure becomes a label in [`SearchResult::errors`]. The search itself
//! fails only when no provider contributed a single image.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::Instant;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::provider::ImageProvider;
use crate::providers::{build_providers, Provider};
use crate::types::{Outcome, ProviderOutcome, SearchResult};

/// Queries a fixed, ordered set of providers concurrently.
///
/// Holds no per-search state; concurrent calls to [`Aggregator::search`]
/// are fully independent.
pub struct Aggregator<P> {
    providers: Vec<P>,
    deadline: Option<Duration>,
}

impl<P: ImageProvider> Aggregator<P> {
    /// Aggregate over `providers`, in the given order, with no deadline.
    pub fn new(providers: Vec<P>) -> Self {
        Self {
            providers,
            deadline: None,
        }
    }

    /// Bound the whole fan-out by `deadline`.
    ///
    /// Providers still pending when it expires are dropped together and
    /// reported as failed; results from providers that already settled
    /// are kept.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn providers(&self) -> &[P] {
        &self.providers
    }

    /// Search every provider for `query` and combine the outcomes.
    ///
    /// # Pipeline
    ///
    /// 1. Reject an empty or whitespace-only query before any provider runs
    /// 2. Fan out to all providers concurrently with [`join_all`]
    /// 3. Wait for every provider to settle (or the deadline to pass)
    /// 4. Concatenate records in provider order; label each failure
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for a blank query.
    /// - [`SearchError::Config`] if the aggregator has no providers.
    /// - [`SearchError::AllSourcesUnavailable`] if no provider returned any
    ///   images. Partial failures are reported in [`SearchResult::errors`].
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let query = validate_query(query)?;
        if self.providers.is_empty() {
            return Err(SearchError::Config("no providers configured".into()));
        }

        tracing::trace!(query, providers = self.providers.len(), "dispatching image search");

        let outcomes = self.fan_out(query).await;
        combine(outcomes)
    }

    /// Query every provider concurrently and return all outcomes, in
    /// provider order, once each has settled.
    pub async fn fan_out(&self, query: &str) -> Vec<ProviderOutcome> {
        let Some((limit, deadline)) = self.deadline_instant() else {
            return join_all(self.providers.iter().map(|p| p.fetch(query))).await;
        };
        let futures = self.providers.iter().map(|provider| async move {
            match tokio::time::timeout_at(deadline, provider.fetch(query)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let err = SearchError::Timeout(format!(
                        "{} did not answer within {}ms",
                        provider.name(),
                        limit.as_millis()
                    ));
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "provider cancelled at deadline"
                    );
                    ProviderOutcome::failure(provider.name(), err.to_string())
                }
            }
        });
        join_all(futures).await
    }

    /// The instant the current fan-out must settle by, if any.
    ///
    /// A deadline too far out to represent is treated as no deadline.
    fn deadline_instant(&self) -> Option<(Duration, Instant)> {
        let limit = self.deadline?;
        match Instant::now().checked_add(limit) {
            Some(deadline) => Some((limit, deadline)),
            None => {
                tracing::debug!(secs = limit.as_secs(), "deadline out of range, ignoring");
                None
            }
        }
    }
}

impl Aggregator<Provider> {
    /// Build an aggregator over every provider enabled in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let aggregator = Self::new(build_providers(config)?);
        Ok(match config.deadline_seconds {
            Some(secs) => aggregator.with_deadline(Duration::from_secs(secs)),
            None => aggregator,
        })
    }
}

/// Check a search term, returning it trimmed.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] if nothing remains after trimming.
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(trimmed)
}

/// Partition settled outcomes into a [`SearchResult`].
///
/// Records keep provider order and each provider's own ordering. Each
/// failed provider contributes one `"<Name> API failed."` label.
///
/// # Errors
///
/// Returns [`SearchError::AllSourcesUnavailable`] if no images were
/// collected, whether because every provider failed or because the ones
/// that answered found nothing.
pub fn combine(outcomes: Vec<ProviderOutcome>) -> Result<SearchResult> {
    let mut result = SearchResult::default();
    let mut succeeded = 0usize;

    for outcome in outcomes {
        let label = outcome.failure_label();
        match outcome.outcome {
            Outcome::Success { records } => {
                succeeded += 1;
                result.images.extend(records);
            }
            Outcome::Failure { .. } => result.errors.push(label),
        }
    }

    if result.images.is_empty() {
        let detail = if !result.errors.is_empty() {
            result.errors.join(" ")
        } else if succeeded == 0 {
            "no providers configured".to_string()
        } else {
            "no provider returned any images".to_string()
        };
        tracing::warn!(
            answered = succeeded,
            failed = result.errors.len(),
            "no images from any provider"
        );
        return Err(SearchError::AllSourcesUnavailable(detail));
    }

    tracing::debug!(
        images = result.images.len(),
        failed = result.errors.len(),
        "search settled"
    );
    Ok(result)
}
