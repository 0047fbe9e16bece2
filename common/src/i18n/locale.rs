//! Opaque locale identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// An opaque locale identifier such as `en` or `fr-CA`.
///
/// Locales compare by their trimmed text. No structure is assumed beyond
/// equality; validation against BCP 47 happens when configuration is loaded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    /// Build a locale from `raw`, discarding blank input.
    ///
    /// ```
    /// use common::i18n::Locale;
    ///
    /// assert_eq!(Locale::parse(" fr ").map(|l| l.to_string()), Some("fr".to_owned()));
    /// assert!(Locale::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        normalise_locale(Some(raw)).map(|value| Self(value.to_owned()))
    }

    /// Get the locale as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Interpret the locale as a Unicode language identifier.
    pub fn language_identifier(&self) -> Result<LanguageIdentifier, LanguageIdentifierError> {
        LanguageIdentifier::from_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
