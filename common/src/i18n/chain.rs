//! Ordered candidate locales for a single lookup.

use std::collections::HashSet;
use std::slice;

use super::Locale;

/// Deduplicated priority order of locales to probe.
///
/// The chain always lists the requested locale first (when one was given),
/// the default next (unless it equals the requested locale), and then every
/// remaining available locale in declaration order. Each locale appears at
/// most once; the first occurrence wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleChain {
    requested: Option<Locale>,
    target: Option<Locale>,
    locales: Vec<Locale>,
}

impl LocaleChain {
    /// Build a chain from the requested locale, the default, and the catalogue.
    ///
    /// ```
    /// use common::i18n::{Locale, LocaleChain};
    ///
    /// let locale = |raw: &str| Locale::parse(raw).unwrap();
    /// let available = [locale("en"), locale("fr"), locale("de")];
    ///
    /// let chain = LocaleChain::build(Some(&locale("de")), Some(&locale("en")), &available);
    /// let order: Vec<&str> = chain.iter().map(Locale::as_str).collect();
    /// assert_eq!(order, ["de", "en", "fr"]);
    /// ```
    #[must_use]
    pub fn build(
        requested: Option<&Locale>,
        default: Option<&Locale>,
        available: &[Locale],
    ) -> Self {
        let mut seen = HashSet::with_capacity(available.len() + 2);
        let locales = requested
            .into_iter()
            .chain(default)
            .chain(available)
            .filter(|locale| seen.insert(*locale))
            .cloned()
            .collect();

        Self {
            requested: requested.cloned(),
            target: requested.or(default).cloned(),
            locales,
        }
    }

    /// The locale the caller explicitly asked for, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&Locale> {
        self.requested.as_ref()
    }

    /// The locale a value must come from to avoid being a fallback.
    ///
    /// This is the requested locale, or the default when nothing was requested.
    #[must_use]
    pub fn target(&self) -> Option<&Locale> {
        self.target.as_ref()
    }

    /// Whether a value supplied by `locale` counts as a fallback.
    #[must_use]
    pub fn is_fallback(&self, locale: &Locale) -> bool {
        self.target.as_ref() != Some(locale)
    }

    /// The candidate locales in probe order.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Iterate over the candidate locales in probe order.
    pub fn iter(&self) -> slice::Iter<'_, Locale> {
        self.locales.iter()
    }

    /// Number of candidate locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the chain has no candidates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Whether `locale` is one of the candidates.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|candidate| candidate == locale)
    }
}

impl<'a> IntoIterator for &'a LocaleChain {
    type Item = &'a Locale;
    type IntoIter = slice::Iter<'a, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
