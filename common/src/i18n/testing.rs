//! Test doubles for exercising resolution.
//!
//! [`RecordingAccessor`] serves fixed per-locale values and remembers which
//! locales were probed, so tests can assert on short-circuiting and on the
//! absence of hidden state.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Locale;

/// Accessor backed by a fixed map that records every probe.
#[derive(Clone, Debug, Default)]
pub struct RecordingAccessor {
    values: HashMap<String, String>,
    probes: RefCell<Vec<String>>,
}

impl RecordingAccessor {
    /// Build an accessor serving `entries` as `(locale, value)` pairs.
    #[must_use]
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(locale, value)| (locale.to_owned(), value.to_owned()))
                .collect(),
            probes: RefCell::new(Vec::new()),
        }
    }

    /// Look up `locale`, recording the probe.
    #[must_use]
    pub fn get(&self, locale: &Locale) -> Option<String> {
        self.probes.borrow_mut().push(locale.to_string());
        self.values.get(locale.as_str()).cloned()
    }

    /// Locales probed so far, in call order.
    #[must_use]
    pub fn probed(&self) -> Vec<String> {
        self.probes.borrow().clone()
    }

    /// The stored value for `locale`, without recording a probe.
    #[must_use]
    pub fn stored(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }
}
