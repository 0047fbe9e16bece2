//! Fallback walk over a [`LocaleChain`].
//!
//! The free functions take a chain and an accessor and return the first
//! present value wrapped in a [`ResolvedValue`]. [`FallbackResolver`] pairs
//! them with validated [`LocaleSettings`] so callers only supply the requested
//! locale.

use std::fmt;

use log::debug;

use super::{Locale, LocaleChain, LocaleSettings, Presence, RESOLVE_TARGET};

/// A value tagged with the locale that supplied it.
///
/// Only resolution creates these. The wrapper never alters the value it holds;
/// provenance lives beside it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedValue<T> {
    value: T,
    resolved_locale: Locale,
    is_fallback: bool,
}

impl<T> ResolvedValue<T> {
    const fn new(value: T, resolved_locale: Locale, is_fallback: bool) -> Self {
        Self {
            value,
            resolved_locale,
            is_fallback,
        }
    }

    /// The resolved value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The locale that supplied the value.
    #[must_use]
    pub const fn resolved_locale(&self) -> &Locale {
        &self.resolved_locale
    }

    /// The supplying locale as a string slice.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.resolved_locale.as_str()
    }

    /// Whether the value came from a locale other than the requested one.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Consume the wrapper, yielding the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume the wrapper, yielding the value, locale, and fallback flag.
    #[must_use]
    pub fn into_parts(self) -> (T, Locale, bool) {
        (self.value, self.resolved_locale, self.is_fallback)
    }

    /// Borrow the value while keeping its provenance.
    #[must_use]
    pub fn as_ref(&self) -> ResolvedValue<&T> {
        ResolvedValue::new(&self.value, self.resolved_locale.clone(), self.is_fallback)
    }

    /// Transform the value while keeping its provenance.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResolvedValue<U>
    where
        F: FnOnce(T) -> U,
    {
        ResolvedValue::new(f(self.value), self.resolved_locale, self.is_fallback)
    }
}

impl<T: fmt::Display> fmt::Display for ResolvedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Return the first present value along `chain`.
///
/// Blank values (see [`Presence`]) are skipped. `None` means no candidate
/// supplied anything; it is an expected outcome rather than an error.
///
/// ```
/// use std::collections::HashMap;
/// use common::i18n::{LocaleSettings, resolve};
///
/// let settings = LocaleSettings::new("en", ["en", "fr", "de"]).unwrap();
/// let greetings = HashMap::from([("en", ""), ("fr", "bonjour"), ("de", "hallo")]);
///
/// let chain = settings.chain_for(Some("en"));
/// let resolved = resolve(&chain, |locale| greetings.get(locale.as_str()).copied()).unwrap();
///
/// assert_eq!(*resolved.value(), "bonjour");
/// assert_eq!(resolved.locale(), "fr");
/// assert!(resolved.is_fallback());
/// ```
pub fn resolve<T, F>(chain: &LocaleChain, accessor: F) -> Option<ResolvedValue<T>>
where
    T: Presence,
    F: FnMut(&Locale) -> Option<T>,
{
    resolve_with(chain, accessor, T::is_present)
}

/// Return the first value along `chain` accepted by `is_present`.
pub fn resolve_with<T, F, P>(
    chain: &LocaleChain,
    mut accessor: F,
    is_present: P,
) -> Option<ResolvedValue<T>>
where
    F: FnMut(&Locale) -> Option<T>,
    P: Fn(&T) -> bool,
{
    let resolved = chain.iter().find_map(|locale| {
        accessor(locale)
            .filter(|value| is_present(value))
            .map(|value| ResolvedValue::new(value, locale.clone(), chain.is_fallback(locale)))
    });

    log_outcome(chain, resolved.as_ref().map(ResolvedValue::resolved_locale));
    resolved
}

/// Return the first present value along `chain` from a fallible accessor.
///
/// The first accessor error ends the walk and is returned unchanged.
pub fn try_resolve<T, E, F>(
    chain: &LocaleChain,
    mut accessor: F,
) -> Result<Option<ResolvedValue<T>>, E>
where
    T: Presence,
    F: FnMut(&Locale) -> Result<Option<T>, E>,
{
    for locale in chain {
        if let Some(value) = accessor(locale)?.filter(Presence::is_present) {
            log_outcome(chain, Some(locale));
            return Ok(Some(ResolvedValue::new(
                value,
                locale.clone(),
                chain.is_fallback(locale),
            )));
        }
    }

    log_outcome(chain, None);
    Ok(None)
}

fn log_outcome(chain: &LocaleChain, resolved: Option<&Locale>) {
    let requested = chain.target().map_or("<none>", Locale::as_str);
    match resolved {
        Some(locale) => debug!(
            target: RESOLVE_TARGET,
            "requested `{requested}`, resolved from `{locale}` (fallback: {})",
            chain.is_fallback(locale),
        ),
        None => debug!(
            target: RESOLVE_TARGET,
            "requested `{requested}`, no value across {} candidate locales",
            chain.len(),
        ),
    }
}

/// Resolver bound to a validated locale configuration.
///
/// The resolver holds no per-request state and may be shared across threads.
#[derive(Clone, Debug)]
pub struct FallbackResolver {
    settings: LocaleSettings,
}

impl FallbackResolver {
    /// Create a resolver over `settings`.
    #[must_use]
    pub const fn new(settings: LocaleSettings) -> Self {
        Self { settings }
    }

    /// The configuration the resolver builds chains from.
    #[must_use]
    pub const fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Build the candidate chain for `requested`.
    #[must_use]
    pub fn chain_for(&self, requested: Option<&str>) -> LocaleChain {
        self.settings.chain_for(requested)
    }

    /// Resolve a value for `requested` using the default presence rule.
    pub fn resolve<T, F>(&self, requested: Option<&str>, accessor: F) -> Option<ResolvedValue<T>>
    where
        T: Presence,
        F: FnMut(&Locale) -> Option<T>,
    {
        resolve(&self.chain_for(requested), accessor)
    }

    /// Resolve a value for `requested` with an explicit presence predicate.
    pub fn resolve_with<T, F, P>(
        &self,
        requested: Option<&str>,
        accessor: F,
        is_present: P,
    ) -> Option<ResolvedValue<T>>
    where
        F: FnMut(&Locale) -> Option<T>,
        P: Fn(&T) -> bool,
    {
        resolve_with(&self.chain_for(requested), accessor, is_present)
    }

    /// Resolve a value for `requested` from a fallible accessor.
    pub fn try_resolve<T, E, F>(
        &self,
        requested: Option<&str>,
        accessor: F,
    ) -> Result<Option<ResolvedValue<T>>, E>
    where
        T: Presence,
        F: FnMut(&Locale) -> Result<Option<T>, E>,
    {
        try_resolve(&self.chain_for(requested), accessor)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::i18n::testing::RecordingAccessor;

    #[fixture]
    fn resolver() -> FallbackResolver {
        let settings = LocaleSettings::new("en", ["en", "fr", "de"])
            .unwrap_or_else(|error| panic!("settings should validate: {error}"));
        FallbackResolver::new(settings)
    }

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(locale, value)| ((*locale).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    #[case(&[("en", "hello")], Some("en"), Some(("hello", "en", false)))]
    #[case(&[("en", ""), ("fr", "bonjour"), ("de", "hallo")], Some("en"), Some(("bonjour", "fr", true)))]
    #[case(&[("en", "hello"), ("fr", "bonjour")], Some("de"), Some(("hello", "en", true)))]
    #[case(&[("de", "hallo")], Some("fr"), Some(("hallo", "de", true)))]
    #[case(&[("fr", "  "), ("de", "hallo")], Some("fr"), Some(("hallo", "de", true)))]
    #[case(&[("en", "hello")], None, Some(("hello", "en", false)))]
    #[case(&[("fr", "bonjour")], None, Some(("bonjour", "fr", true)))]
    #[case(&[("nl", "hallo")], Some("nl"), Some(("hallo", "nl", false)))]
    #[case(&[("en", ""), ("fr", " ")], Some("en"), None)]
    #[case(&[], Some("fr"), None)]
    fn resolves_through_the_chain(
        resolver: FallbackResolver,
        #[case] entries: &[(&str, &str)],
        #[case] requested: Option<&str>,
        #[case] expected: Option<(&str, &str, bool)>,
    ) {
        let values = table(entries);
        let resolved = resolver.resolve(requested, |locale| values.get(locale.as_str()));

        let actual = resolved
            .as_ref()
            .map(|found| (found.value().as_str(), found.locale(), found.is_fallback()));
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn stops_at_the_first_present_value(resolver: FallbackResolver) {
        let accessor = RecordingAccessor::new([("en", ""), ("fr", "bonjour"), ("de", "hallo")]);
        let resolved = resolver.resolve(Some("en"), |locale| accessor.get(locale));

        assert_eq!(resolved.map(ResolvedValue::into_value), Some("bonjour".to_owned()));
        assert_eq!(accessor.probed(), ["en", "fr"]);
    }

    #[rstest]
    fn repeated_resolution_is_stable(resolver: FallbackResolver) {
        let values = table(&[("en", ""), ("fr", "bonjour")]);
        let before = values.clone();

        let first = resolver.resolve(Some("en"), |locale| values.get(locale.as_str()));
        let second = resolver.resolve(Some("en"), |locale| values.get(locale.as_str()));

        assert_eq!(first, second);
        assert_eq!(values, before);
    }

    #[rstest]
    fn honours_explicit_predicates(resolver: FallbackResolver) {
        let counts = HashMap::from([("en", 0_u32), ("fr", 3)]);

        let resolved = resolver.resolve_with(
            Some("en"),
            |locale| counts.get(locale.as_str()).copied(),
            |count| *count > 0,
        );

        let (value, locale, fallback) = resolved
            .map(ResolvedValue::into_parts)
            .unwrap_or_else(|| panic!("a positive count should resolve"));
        assert_eq!(value, 3);
        assert_eq!(locale, "fr");
        assert!(fallback);
    }

    #[rstest]
    fn propagates_accessor_failures(resolver: FallbackResolver) {
        let outcome: Result<Option<ResolvedValue<String>>, String> =
            resolver.try_resolve(Some("en"), |locale| match locale.as_str() {
                "en" => Ok(None),
                other => Err(format!("lookup failed for {other}")),
            });

        assert_eq!(outcome, Err("lookup failed for fr".to_owned()));
    }

    #[rstest]
    fn fallible_accessors_skip_blank_values(resolver: FallbackResolver) {
        let outcome: Result<_, String> = resolver.try_resolve(Some("fr"), |locale| {
            Ok(match locale.as_str() {
                "fr" => Some(String::new()),
                "en" => Some("hello".to_owned()),
                _ => None,
            })
        });

        let resolved = outcome
            .unwrap_or_else(|error| panic!("accessor should not fail: {error}"))
            .unwrap_or_else(|| panic!("a value should resolve"));
        assert_eq!(resolved.locale(), "en");
        assert!(resolved.is_fallback());
    }

    #[test]
    fn maps_values_without_losing_provenance() {
        let requested = Locale::parse("fr");
        let default = Locale::parse("en");
        let chain = LocaleChain::build(requested.as_ref(), default.as_ref(), &[]);
        let resolved = resolve(&chain, |locale| (locale == "en").then_some("hello"))
            .unwrap_or_else(|| panic!("a value should resolve"));

        let mapped = resolved.as_ref().map(|value| value.len());
        assert_eq!(*mapped.value(), 5);
        assert_eq!(mapped.locale(), "en");
        assert!(mapped.is_fallback());
        assert_eq!(resolved.to_string(), "hello");
    }
}
