//! Locale configuration loaded once at startup.
//!
//! Settings are kept in a small TOML document:
//!
//! ```toml
//! default_locale = "en"
//! available_locales = ["en", "fr", "de"]
//! ```
//!
//! Parsing and validation both happen here so that a missing default or an
//! empty catalogue fails at load time rather than on the first lookup. The
//! validated [`LocaleSettings`] are then passed explicitly to whatever performs
//! resolution; nothing reads them from global state.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use common::i18n::{ConfigurationError, FallbackResolver, LocaleSettings, normalise_locale};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading locale configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration at {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`FallbackConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but cannot drive resolution.
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Raw locale configuration as written in TOML.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackConfig {
    /// Locale tried after the requested one.
    ///
    /// Whitespace-only values are treated as absent and rejected during
    /// validation.
    pub default_locale: Option<String>,
    /// Every supported locale, in the order fallbacks should try them.
    pub available_locales: Vec<String>,
}

impl FallbackConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use translated_fields::FallbackConfig;
    ///
    /// let config = FallbackConfig::from_toml_str(
    ///     "default_locale = \"en\"\navailable_locales = [\"en\", \"fr\"]\n",
    /// )
    /// .unwrap();
    /// assert_eq!(config.default_locale(), Some("en"));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse configuration from `path`.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(target: "translated_fields::config", "loaded locale configuration from {path}");
        Self::from_toml_str(&source)
    }

    /// Load configuration through `loader`.
    ///
    /// This exists so callers and tests can inject configuration from any
    /// source without touching the file system.
    ///
    /// # Examples
    ///
    /// ```
    /// use translated_fields::FallbackConfig;
    ///
    /// let config = FallbackConfig::load_with(|| Ok(FallbackConfig::default())).unwrap();
    /// assert!(config.available_locales.is_empty());
    /// ```
    pub fn load_with<F>(loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce() -> Result<Self, ConfigError>,
    {
        loader()
    }

    /// Returns the configured default locale, if present.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        normalise_locale(self.default_locale.as_deref())
    }

    /// Validate the configuration into [`LocaleSettings`].
    pub fn settings(&self) -> Result<LocaleSettings, ConfigError> {
        let default = self
            .default_locale()
            .ok_or(ConfigurationError::MissingDefault)?;
        Ok(LocaleSettings::new(default, &self.available_locales)?)
    }

    /// Validate the configuration and build a resolver from it.
    pub fn resolver(&self) -> Result<FallbackResolver, ConfigError> {
        self.settings().map(FallbackResolver::new)
    }
}
