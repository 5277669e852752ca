//! Unsplash: photographer community with captioned photos.
//!
//! Authenticates with an `Authorization: Client-ID <access key>` header.
//! Titles fall back from `description` to `alt_description`; tags come
//! from the optional `tags[].title` objects on each result.

use serde::Deserialize;

use crate::config::ProviderSettings;
use crate::error::SearchError;
use crate::http;
use crate::provider::{ImageProvider, PAGE_SIZE};
use crate::types::{ImageRecord, ImageSource};

use super::{build_record, endpoint, title_or_untitled};

/// Public Unsplash API host.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Unsplash photo search adapter.
pub struct UnsplashProvider {
    client: reqwest::Client,
    access_key: Option<String>,
    base_url: String,
}

impl UnsplashProvider {
    pub fn new(client: reqwest::Client, settings: &ProviderSettings) -> Self {
        Self {
            client,
            access_key: settings.api_key().map(str::to_owned),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}

impl ImageProvider for UnsplashProvider {
    fn name(&self) -> &str {
        ImageSource::Unsplash.name()
    }

    fn source(&self) -> ImageSource {
        ImageSource::Unsplash
    }

    async fn fetch_images(&self, query: &str) -> Result<Vec<ImageRecord>, SearchError> {
        let Some(key) = self.access_key.as_deref() else {
            return Err(SearchError::MissingCredential(self.name().to_owned()));
        };

        tracing::trace!(query, "Unsplash search");

        let per_page = PAGE_SIZE.to_string();
        let request = self
            .client
            .get(endpoint(&self.base_url, "/search/photos"))
            .header("Authorization", format!("Client-ID {key}"))
            .query(&[("query", query), ("per_page", per_page.as_str())]);

        let body: UnsplashResponse = http::get_json(self.name(), request).await?;
        Ok(normalize_results(body.results))
    }
}

#[derive(Debug, Deserialize)]
struct UnsplashResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    id: Option<String>,
    description: Option<String>,
    alt_description: Option<String>,
    urls: Option<UnsplashUrls>,
    tags: Option<Vec<UnsplashTag>>,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    thumb: Option<String>,
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnsplashTag {
    title: Option<String>,
}

fn normalize_results(results: Vec<UnsplashPhoto>) -> Vec<ImageRecord> {
    let records: Vec<ImageRecord> = results
        .into_iter()
        .filter_map(|photo| {
            let title = title_or_untitled(&[
                photo.description.as_deref(),
                photo.alt_description.as_deref(),
            ]);
            let tags = photo
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|t| t.title)
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect();
            let (thumb, small) = photo
                .urls
                .map(|u| (u.thumb, u.small))
                .unwrap_or_default();
            build_record(
                ImageSource::Unsplash,
                photo.id.unwrap_or_default(),
                thumb,
                small,
                title,
                tags,
            )
        })
        .take(PAGE_SIZE)
        .collect();

    tracing::debug!(count = records.len(), "Unsplash results normalised");
    records
}
