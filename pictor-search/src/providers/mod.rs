//! Image provider implementations.
//!
//! Each module provides a struct implementing [`crate::provider::ImageProvider`]
//! for one provider's JSON search API. [`Provider`] closes over the set so
//! the aggregator can hold heterogeneous adapters in one `Vec`.

pub mod pexels;
pub mod pixabay;
pub mod unsplash;

pub use pexels::PexelsProvider;
pub use pixabay::PixabayProvider;
pub use unsplash::UnsplashProvider;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::ImageProvider;
use crate::types::{ImageRecord, ImageSource, UNTITLED};

/// One of the supported providers, dispatched statically.
pub enum Provider {
    Pixabay(PixabayProvider),
    Unsplash(UnsplashProvider),
    Pexels(PexelsProvider),
}

impl Provider {
    /// Build the adapter for `source` from its settings in `config`.
    pub fn new(source: ImageSource, client: reqwest::Client, config: &SearchConfig) -> Self {
        let settings = config.settings(source);
        match source {
            ImageSource::Pixabay => Self::Pixabay(PixabayProvider::new(client, settings)),
            ImageSource::Unsplash => Self::Unsplash(UnsplashProvider::new(client, settings)),
            ImageSource::Pexels => Self::Pexels(PexelsProvider::new(client, settings)),
        }
    }
}

impl ImageProvider for Provider {
    fn name(&self) -> &str {
        self.source().name()
    }

    fn source(&self) -> ImageSource {
        match self {
            Self::Pixabay(_) => ImageSource::Pixabay,
            Self::Unsplash(_) => ImageSource::Unsplash,
            Self::Pexels(_) => ImageSource::Pexels,
        }
    }

    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageRecord>, SearchError> {
        match self {
            Self::Pixabay(p) => p.fetch_images(query).await,
            Self::Unsplash(p) => p.fetch_images(query).await,
            Self::Pexels(p) => p.fetch_images(query).await,
        }
    }
}

/// Build adapters for every enabled provider, in fan-out order.
///
/// All adapters share one HTTP client.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the HTTP client cannot be constructed.
pub fn build_providers(config: &SearchConfig) -> Result<Vec<Provider>, SearchError> {
    let client = http::build_client(config)?;
    Ok(config
        .enabled_sources()
        .into_iter()
        .map(|source| Provider::new(source, client.clone(), config))
        .collect())
}

/// Join a base URL and an API path without doubling slashes.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Returns the first candidate that is non-empty after trimming,
/// or [`UNTITLED`].
fn title_or_untitled(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Assemble a record, or `None` when a required field is blank.
fn build_record(
    source: ImageSource,
    id: String,
    thumbnail_url: Option<String>,
    preview_url: Option<String>,
    title: String,
    tags: Vec<String>,
) -> Option<ImageRecord> {
    let thumbnail_url = thumbnail_url.filter(|u| !u.trim().is_empty());
    let preview_url = preview_url.filter(|u| !u.trim().is_empty());
    match (thumbnail_url, preview_url) {
        (Some(thumbnail_url), Some(preview_url)) if !id.is_empty() => Some(ImageRecord {
            id,
            thumbnail_url,
            preview_url,
            title,
            source,
            tags,
        }),
        _ => {
            tracing::debug!(%source, id = %id, "skipping hit without id or image URLs");
            None
        }
    }
}
