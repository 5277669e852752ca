//! Core types for normalised image records and aggregated search output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a provider supplies no usable label for an image.
pub const UNTITLED: &str = "Untitled";

/// A single image, normalised into the shape shared by every provider.
///
/// Every field is populated before a record leaves a provider adapter:
/// identifiers are stringified, missing titles fall back to [`UNTITLED`],
/// and missing tag data becomes an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Provider-native identifier, stringified.
    pub id: String,
    /// Small thumbnail URL.
    pub thumbnail_url: String,
    /// Larger preview URL.
    pub preview_url: String,
    /// Human-readable label.
    pub title: String,
    /// Which provider returned this image.
    pub source: ImageSource,
    /// Free-text labels, possibly empty.
    pub tags: Vec<String>,
}

/// Image providers that pictor-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSource {
    /// Pixabay: free stock images, comma-separated tag strings.
    Pixabay,
    /// Unsplash: photographer community, tag objects on search hits.
    Unsplash,
    /// Pexels: stock photos, no tag data in search responses.
    Pexels,
}

impl ImageSource {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pixabay => "Pixabay",
            Self::Unsplash => "Unsplash",
            Self::Pexels => "Pexels",
        }
    }

    /// Returns all provider variants in fan-out order.
    pub fn all() -> &'static [ImageSource] {
        &[Self::Pixabay, Self::Unsplash, Self::Pexels]
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a single provider call settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The provider answered and its records were normalised.
    Success { records: Vec<ImageRecord> },
    /// The provider failed; `reason` is for logs, not for callers.
    Failure { reason: String },
}

/// The settled result of one provider call within a fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOutcome {
    /// Display name of the provider that produced this outcome.
    pub provider: String,
    pub outcome: Outcome,
}

impl ProviderOutcome {
    pub fn success(provider: impl Into<String>, records: Vec<ImageRecord>) -> Self {
        Self {
            provider: provider.into(),
            outcome: Outcome::Success { records },
        }
    }

    pub fn failure(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            outcome: Outcome::Failure {
                reason: reason.into(),
            },
        }
    }

    /// Returns `true` if the provider answered successfully.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// The user-facing label reported for a failed provider.
    pub fn failure_label(&self) -> String {
        format!("{} API failed.", self.provider)
    }
}

/// Combined output of an aggregated search.
///
/// `images` preserves provider order, and each provider's own ordering
/// within it. `errors` holds one label per failed provider and is omitted
/// from serialised output when every provider succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub images: Vec<ImageRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl SearchResult {
    /// Returns `true` if at least one provider failed.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}
