//! Pixabay: free stock images with comma-separated tag strings.
//!
//! The API key travels as the `key` query parameter. Hits carry a single
//! `tags` string that doubles as the title, since Pixabay has no caption
//! field.

use serde::Deserialize;

use crate::config::ProviderSettings;
use crate::error::SearchError;
use crate::http;
use crate::provider::{ImageProvider, PAGE_SIZE};
use crate::types::{ImageRecord, ImageSource};

use super::{build_record, endpoint, title_or_untitled};

/// Public Pixabay API host.
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com";

/// Pixabay search API adapter.
pub struct PixabayProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PixabayProvider {
    pub fn new(client: reqwest::Client, settings: &ProviderSettings) -> Self {
        Self {
            client,
            api_key: settings.api_key().map(str::to_owned),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}

impl ImageProvider for PixabayProvider {
    fn name(&self) -> &str {
        ImageSource::Pixabay.name()
    }

    fn source(&self) -> ImageSource {
        ImageSource::Pixabay
    }

    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageRecord>, SearchError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SearchError::MissingCredential(self.name().to_owned()));
        };

        tracing::trace!(query, "Pixabay search");

        let per_page = PAGE_SIZE.to_string();
        let request = self
            .client
            .get(endpoint(&self.base_url, "/api/"))
            .query(&[
                ("key", key),
                ("q", query),
                ("image_type", "photo"),
                ("per_page", per_page.as_str()),
            ]);

        let body: PixabayResponse = http::get_json(self.name(), request).await?;
        Ok(normalize_hits(body.hits))
    }
}

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
struct PixabayHit {
    id: Option<u64>,
    #[serde(rename = "previewURL")]
    preview_url: Option<String>,
    #[serde(rename = "webformatURL")]
    webformat_url: Option<String>,
    tags: Option<String>,
}

/// Normalise Pixabay hits, keeping at most [`PAGE_SIZE`].
fn normalize_hits(hits: Vec<PixabayHit>) -> Vec<ImageRecord> {
    let records: Vec<ImageRecord> = hits
        .into_iter()
        .filter_map(|hit| {
            let title = title_or_untitled(&[hit.tags.as_deref()]);
            let tags = split_tags(hit.tags.as_deref().unwrap_or_default());
            build_record(
                ImageSource::Pixabay,
                hit.id.map(|id| id.to_string()).unwrap_or_default(),
                hit.preview_url,
                hit.webformat_url,
                title,
                tags,
            )
        })
        .take(PAGE_SIZE)
        .collect();

    tracing::debug!(count = records.len(), "Pixabay hits normalised");
    records
}

/// Split a `"cat, kitten, pet"` tag string into trimmed, non-empty tags.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
