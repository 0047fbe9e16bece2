//! Error types for locale configuration and catalogue loading.
//!
//! Resolution itself never fails: a lookup either yields a tagged value or
//! nothing. Errors only arise while validating configuration up front or while
//! reading catalogue sources.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Raised when the locale configuration cannot drive resolution.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The available locale list is empty.
    #[error("no available locales are configured")]
    NoAvailableLocales,

    /// The default locale is missing or blank.
    #[error("no default locale is configured")]
    MissingDefault,

    /// The default locale is not one of the available locales.
    #[error("default locale `{default}` is not among the available locales")]
    DefaultNotAvailable {
        /// The configured default locale.
        default: String,
    },

    /// An available locale entry is blank.
    #[error("available locale at position {position} is blank")]
    BlankLocale {
        /// Zero-based position of the blank entry.
        position: usize,
    },

    /// A locale appears more than once in the available list.
    #[error("locale `{locale}` is listed more than once")]
    DuplicateLocale {
        /// The repeated locale.
        locale: String,
    },

    /// A locale is not a valid language identifier.
    #[error("locale `{locale}` is not a valid language identifier")]
    InvalidTag {
        /// The rejected locale text.
        locale: String,
    },
}

/// Raised when a translation catalogue cannot be built.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// A translation table could not be parsed from TOML.
    #[error("invalid translation table: {0}")]
    Toml(#[from] toml::de::Error),

    /// A top-level table entry did not describe a locale.
    #[error("top-level entry `{entry}` must be a table keyed by locale")]
    MalformedTable {
        /// The offending top-level key.
        entry: String,
    },

    /// Inserting a key would replace an existing branch or leaf of another kind.
    #[error("key `{key}` conflicts with an existing entry for locale `{locale}`")]
    KeyConflict {
        /// Locale being written.
        locale: String,
        /// Dotted key being written.
        key: String,
    },

    /// A catalogue locale is not a valid language identifier.
    #[error("locale `{locale}` is not a valid language identifier")]
    InvalidLocale {
        /// The rejected locale text.
        locale: String,
    },

    /// Two top-level tables name the same locale.
    #[error("locale `{locale}` appears more than once in the translation table")]
    DuplicateLocale {
        /// The repeated locale.
        locale: String,
    },

    /// Fluent source text could not be parsed or added to its bundle.
    #[error("invalid Fluent resource for locale `{locale}`: {reason}")]
    Fluent {
        /// Locale the resource was meant for.
        locale: String,
        /// Description of the parser or bundle errors.
        reason: String,
    },

    /// The catalogue directory pattern was rejected.
    #[error("invalid catalogue directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A catalogue file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_not_available_names_the_locale() {
        let err = ConfigurationError::DefaultNotAvailable {
            default: "nl".to_owned(),
        };

        assert!(err.to_string().contains("`nl`"));
    }

    #[test]
    fn io_failures_keep_their_source() {
        let err = CatalogueError::Io {
            path: Utf8PathBuf::from("locales/fr/main.ftl"),
            source: std::io::Error::other("permission denied"),
        };

        assert!(err.to_string().contains("locales/fr/main.ftl"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
