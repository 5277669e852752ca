//! Pexels: stock photos keyed by a bare `Authorization` header.
//!
//! Search responses expose no tag data, so Pexels records always carry an
//! empty tag list. Titles come from the photo's `alt` text.

use serde::Deserialize;

use crate::config::ProviderSettings;
use crate::error::SearchError;
use crate::http;
use crate::provider::{ImageProvider, PAGE_SIZE};
use crate::types::{ImageRecord, ImageSource};

use super::{build_record, endpoint, title_or_untitled};

/// Public Pexels API host.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com";

/// Pexels photo search adapter.
pub struct PexelsProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PexelsProvider {
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

impl ImageProvider for PexelsProvider {
    fn name(&self) -> &str {
        ImageSource::Pexels.name()
    }

    fn source(&self) -> ImageSource {
        ImageSource::Pexels
    }

    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageRecord>, SearchError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SearchError::MissingCredential(self.name().to_owned()));
        };

        tracing::trace!(query, "Pexels search");

        let per_page = PAGE_SIZE.to_string();
        let request = self
            .client
            .get(endpoint(&self.base_url, "/v1/search"))
            .header("Authorization", key)
            .query(&[("query", query), ("per_page", per_page.as_str())]);

        let body: PexelsResponse = http::get_json(self.name(), request).await?;
        Ok(normalize_photos(body.photos))
    }
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    id: Option<u64>,
    alt: Option<String>,
    src: Option<PexelsSrc>,
}

#[derive(Debug, Deserialize)]
struct PexelsSrc {
    small: Option<String>,
    medium: Option<String>,
}

fn normalize_photos(photos: Vec<PexelsPhoto>) -> Vec<ImageRecord> {
    let records: Vec<ImageRecord> = photos
        .into_iter()
        .filter_map(|photo| {
            let title = title_or_untitled(&[photo.alt.as_deref()]);
            let (small, medium) = photo
                .src
                .map(|s| (s.small, s.medium))
                .unwrap_or_default();
            build_record(
                ImageSource::Pexels,
                photo.id.map(|id| id.to_string()).unwrap_or_default(),
                small,
                medium,
                title,
                Vec::new(),
            )
        })
        .take(PAGE_SIZE)
        .collect();

    tracing::debug!(count = records.len(), "Pexels photos normalised");
    records
}
