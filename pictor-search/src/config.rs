//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, their credentials,
//! request timeouts and the optional fan-out deadline. It is built once at
//! process start and passed by reference into the aggregator and adapters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::ImageSource;

/// Per-provider settings: on/off switch, credential and endpoint override.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Whether this provider takes part in the fan-out.
    pub enabled: bool,
    /// API key or access key. Blank or absent means every fetch fails.
    pub api_key: Option<String>,
    /// Base URL override, mostly for tests against a mock server.
    /// `None` uses the provider's public API host.
    pub base_url: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: None,
        }
    }
}

impl ProviderSettings {
    /// Enabled settings with the given API key and the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    /// Enabled settings with no API key.
    pub fn without_key() -> Self {
        Self::default()
    }

    /// Disabled settings; the provider is left out of the fan-out.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Set the base URL (useful for testing with mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The configured key, if it is present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for an aggregated image search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-request HTTP timeout in seconds. A provider that times out
    /// counts as a failed provider.
    pub timeout_seconds: u64,
    /// Deadline for the whole fan-out in seconds. When it passes, every
    /// provider still pending is dropped and reported as failed.
    pub deadline_seconds: Option<u64>,
    /// Custom User-Agent string. If `None`, a crate-specific default is sent.
    pub user_agent: Option<String>,
    pub pixabay: ProviderSettings,
    pub unsplash: ProviderSettings,
    pub pexels: ProviderSettings,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            deadline_seconds: None,
            user_agent: None,
            pixabay: ProviderSettings::without_key(),
            unsplash: ProviderSettings::without_key(),
            pexels: ProviderSettings::without_key(),
        }
    }
}

impl SearchConfig {
    /// Settings for one provider.
    pub fn settings(&self, source: ImageSource) -> &ProviderSettings {
        match source {
            ImageSource::Pixabay => &self.pixabay,
            ImageSource::Unsplash => &self.unsplash,
            ImageSource::Pexels => &self.pexels,
        }
    }

    /// Mutable settings for one provider.
    pub fn settings_mut(&mut self, source: ImageSource) -> &mut ProviderSettings {
        match source {
            ImageSource::Pixabay => &mut self.pixabay,
            ImageSource::Unsplash => &mut self.unsplash,
            ImageSource::Pexels => &mut self.pexels,
        }
    }

    /// Enabled providers in fan-out order.
    pub fn enabled_sources(&self) -> Vec<ImageSource> {
        ImageSource::all()
            .iter()
            .copied()
            .filter(|s| self.settings(*s).enabled)
            .collect()
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `deadline_seconds`, when set, must be greater than 0
    /// - at least one provider must be enabled
    /// - every `base_url` override must be an absolute http(s) URL
    ///
    /// Missing API keys are not a configuration error; the affected
    /// provider fails on every fetch instead.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.deadline_seconds == Some(0) {
            return Err(SearchError::Config(
                "deadline_seconds must be greater than 0".into(),
            ));
        }
        if self.enabled_sources().is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        for source in ImageSource::all() {
            if let Some(base) = self.settings(*source).base_url.as_deref() {
                let parsed = url::Url::parse(base).map_err(|e| {
                    SearchError::Config(format!("invalid base_url for {source}: {e}"))
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(SearchError::Config(format!(
                        "base_url for {source} must use http or https"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.deadline_seconds.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn default_config_enables_all_three() {
        let config = SearchConfig::default();
        assert_eq!(config.enabled_sources(), ImageSource::all().to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_deadline_rejected() {
        let config = SearchConfig {
            deadline_seconds: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("deadline_seconds"));
    }

    #[test]
    fn all_disabled_rejected() {
        let config = SearchConfig {
            pixabay: ProviderSettings::disabled(),
            unsplash: ProviderSettings::disabled(),
            pexels: ProviderSettings::disabled(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("provider"));
    }

    #[test]
    fn invalid_base_url_rejected() {
        let config = SearchConfig {
            pexels: ProviderSettings::new("k").with_base_url("not a url"),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Pexels"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = SearchConfig {
            unsplash: ProviderSettings::new("k").with_base_url("ftp://example.com"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn enabled_sources_skips_disabled() {
        let config = SearchConfig {
            unsplash: ProviderSettings::disabled(),
            ..Default::default()
        };
        assert_eq!(
            config.enabled_sources(),
            vec![ImageSource::Pixabay, ImageSource::Pexels]
        );
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let settings = ProviderSettings::new("   ");
        assert!(settings.api_key().is_none());
        assert_eq!(ProviderSettings::new(" key ").api_key(), Some("key"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let settings = ProviderSettings::new("super-secret");
        let debug = format!("{settings:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn settings_mut_updates_matching_provider() {
        let mut config = SearchConfig::default();
        config.settings_mut(ImageSource::Pexels).api_key = Some("px".into());
        assert_eq!(config.pexels.api_key(), Some("px"));
        assert!(config.pixabay.api_key().is_none());
    }

    #[test]
    fn deserialises_partial_json_with_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"pexels":{"api_key":"abc"}}"#)
                .expect("deserialize");
        assert_eq!(config.timeout_seconds, 8);
        assert_eq!(config.pexels.api_key(), Some("abc"));
        assert!(config.pexels.enabled);
        assert!(config.pixabay.enabled);
    }
}
