//! Host configuration: TOML file plus provider credentials from the
//! environment.
//!
//! The resulting [`PictorConfig`] is built once at startup and its
//! [`SearchConfig`] is handed to the aggregator; nothing here is global.

use std::path::{Path, PathBuf};

use pictor_search::{ImageSource, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::error::{PictorError, Result};

/// Environment variable holding each provider's credential.
pub fn credential_env_var(source: ImageSource) -> &'static str {
    match source {
        ImageSource::Pixabay => "PIXABAY_API_KEY",
        ImageSource::Unsplash => "UNSPLASH_ACCESS_KEY",
        ImageSource::Pexels => "PEXELS_API_KEY",
    }
}

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PictorConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    pub search: SearchConfig,
}

impl PictorConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PictorError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PictorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/pictor/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("pictor").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("pictor")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/pictor-config/config.toml")
        }
    }

    /// Resolve the startup configuration.
    ///
    /// Reads `path` if given (it must exist), otherwise the default path
    /// if a file is there, otherwise starts from defaults. Credentials from
    /// the process environment are then applied and the search section is
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file is
    /// malformed, or if the resulting search config is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_credentials(|name| std::env::var(name).ok());
        config.search.validate()?;
        Ok(config)
    }

    /// Overlay provider credentials looked up by environment variable name.
    ///
    /// Blank values are ignored so an empty variable does not clear a key
    /// set in the file.
    pub fn apply_credentials(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for source in ImageSource::all() {
            let var = credential_env_var(*source);
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(provider = %source, var, "credential loaded from environment");
                self.search.settings_mut(*source).api_key = Some(value);
            }
        }
    }
}
