//! Trait definition for pluggable image provider adapters.
//!
//! Each provider (Pixabay, Unsplash, Pexels) implements [`ImageProvider`]
//! to translate its own request and response shapes into
//! [`ImageRecord`] values.

use std::future::Future;

use crate::error::SearchError;
use crate::types::{ImageRecord, ImageSource, ProviderOutcome};

/// Number of results requested from, and kept per, provider.
pub const PAGE_SIZE: usize = 10;

/// A pluggable image provider backend.
///
/// Implementors query one provider's search API and normalise every hit
/// into an [`ImageRecord`]. Each provider handles its own:
///
/// - credential placement (header or query parameter)
/// - query parameters, including the fixed [`PAGE_SIZE`]
/// - JSON decoding of its response shape
/// - fallbacks for missing titles and tags
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait ImageProvider: Send + Sync {
    /// Display name used in logs and failure labels.
    fn name(&self) -> &str;

    /// Which [`ImageSource`] this adapter tags its records with.
    fn source(&self) -> ImageSource;

    /// Query the provider and return normalised records.
    ///
    /// One outbound request per call; no retries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the credential is missing, the request
    /// fails, the provider answers with a non-2xx status, or the body
    /// cannot be decoded.
    fn fetch_images(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<ImageRecord>, SearchError>> + Send;

    /// Query the provider, folding any error into [`crate::Outcome::Failure`].
    ///
    /// Never fails: a fault in one provider is reported as data so that
    /// sibling providers in the same fan-out are unaffected.
    fn fetch(&self, query: &str) -> impl Future<Output = ProviderOutcome> + Send {
        async move {
            match self.fetch_images(query).await {
                Ok(records) => {
                    tracing::debug!(
                        provider = self.name(),
                        count = records.len(),
                        "provider returned images"
                    );
                    ProviderOutcome::success(self.name(), records)
                }
                Err(err) => {
                    tracing::warn!(provider = self.name(), error = %err, "provider query failed");
                    ProviderOutcome::failure(self.name(), err.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Outcome, UNTITLED};

    /// A mock provider for testing trait bounds and outcome folding.
    struct MockProvider {
        fail: bool,
    }

    impl ImageProvider for MockProvider {
        fn name(&self) -> &str {
            "Mock"
        }

        fn source(&self) -> ImageSource {
            ImageSource::Pexels
        }

        async fn fetch_images(&self, query: &str) -> Result<Vec<ImageRecord>, SearchError> {
            if self.fail {
                return Err(SearchError::Http("connection reset".into()));
            }
            Ok(vec![ImageRecord {
                id: "1".into(),
                thumbnail_url: "https://img.example/t.jpg".into(),
                preview_url: "https://img.example/p.jpg".into(),
                title: format!("{query} {UNTITLED}"),
                source: self.source(),
                tags: vec![],
            }])
        }
    }

    #[test]
    fn mock_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockProvider>();
    }

    #[tokio::test]
    async fn fetch_wraps_records_in_success() {
        let outcome = MockProvider { fail: false }.fetch("cat").await;
        assert_eq!(outcome.provider, "Mock");
        match outcome.outcome {
            Outcome::Success { records } => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].title, "cat Untitled");
            }
            Outcome::Failure { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[tokio::test]
    async fn fetch_folds_error_into_failure() {
        let outcome = MockProvider { fail: true }.fetch("cat").await;
        assert_eq!(
            outcome.outcome,
            Outcome::Failure {
                reason: "HTTP error: connection reset".into()
            }
        );
        assert_eq!(outcome.failure_label(), "Mock API failed.");
    }
}
