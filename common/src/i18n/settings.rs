//! Validated locale configuration.

use std::collections::HashSet;

use log::debug;

use super::{ConfigurationError, Locale, LocaleChain, normalise_locale};

/// The default locale and ordered catalogue of available locales.
///
/// Construction validates eagerly so that malformed configuration surfaces at
/// load time instead of during individual lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleSettings {
    default: Locale,
    available: Vec<Locale>,
}

impl LocaleSettings {
    /// Validate `default` against the ordered `available` locales.
    ///
    /// ```
    /// use common::i18n::{ConfigurationError, LocaleSettings};
    ///
    /// let settings = LocaleSettings::new("en", ["en", "fr"]).unwrap();
    /// assert_eq!(settings.default_locale().as_str(), "en");
    ///
    /// let error = LocaleSettings::new("nl", ["en", "fr"]).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     ConfigurationError::DefaultNotAvailable { default: "nl".to_owned() },
    /// );
    /// ```
    pub fn new<I, S>(default: &str, available: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let available = parse_available(available)?;
        if available.is_empty() {
            return Err(ConfigurationError::NoAvailableLocales);
        }

        let default = Locale::parse(default).ok_or(ConfigurationError::MissingDefault)?;
        if !available.contains(&default) {
            return Err(ConfigurationError::DefaultNotAvailable {
                default: default.into_inner(),
            });
        }

        debug!(
            target: "translated_fields::settings",
            "accepted default locale `{default}` with {} available locales",
            available.len(),
        );

        Ok(Self { default, available })
    }

    /// The configured default locale.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// The available locales in declaration order.
    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.available
    }

    /// Whether `locale` is one of the available locales.
    #[must_use]
    pub fn supports(&self, locale: &str) -> bool {
        normalise_locale(Some(locale))
            .is_some_and(|trimmed| self.available.iter().any(|candidate| candidate == trimmed))
    }

    /// Build the candidate chain for `requested`.
    ///
    /// A missing or blank request starts the chain at the default locale.
    #[must_use]
    pub fn chain_for(&self, requested: Option<&str>) -> LocaleChain {
        let requested = requested.and_then(Locale::parse);
        LocaleChain::build(requested.as_ref(), Some(&self.default), &self.available)
    }
}

fn parse_available<I, S>(available: I) -> Result<Vec<Locale>, ConfigurationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut locales = Vec::new();

    for (position, raw) in available.into_iter().enumerate() {
        let locale = Locale::parse(raw.as_ref())
            .ok_or(ConfigurationError::BlankLocale { position })?;

        if locale.language_identifier().is_err() {
            return Err(ConfigurationError::InvalidTag {
                locale: locale.into_inner(),
            });
        }
        if !seen.insert(locale.clone()) {
            return Err(ConfigurationError::DuplicateLocale {
                locale: locale.into_inner(),
            });
        }

        locales.push(locale);
    }

    Ok(locales)
}
