//! Nested translation tables keyed by locale.
//!
//! Each locale owns a tree of keys. Lookups split dotted keys and scopes into
//! path segments, so `currency.format` under scope `number` reads the same
//! entry as key `format` under scope `number.currency`.
//!
//! ```toml
//! [en]
//! greeting = "Hello"
//!
//! [en.number.currency]
//! format = "%u%n"
//! ```
//!
//! Only text leaves are messages. Numbers, booleans, arrays and dates are kept
//! so the table still loads, but lookups treat them as missing.

use std::collections::btree_map::{self, BTreeMap};
use std::iter;

use log::warn;
use serde::Deserialize;

use super::{
    CATALOGUE_TARGET, CatalogueError, Locale, LocaleChain, Presence, ResolvedValue, resolve_with,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Table(BTreeMap<String, Entry>),
    Other(toml::Value),
}

impl Entry {
    fn find<'a, I>(&self, mut segments: I) -> Option<&str>
    where
        I: Iterator<Item = &'a str>,
    {
        match (segments.next(), self) {
            (None, Self::Text(text)) => Some(text.as_str()),
            (Some(segment), Self::Table(children)) => children.get(segment)?.find(segments),
            _ => None,
        }
    }
}

/// Per-locale translation trees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationTable {
    locales: BTreeMap<Locale, BTreeMap<String, Entry>>,
}

impl TranslationTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table whose top-level keys are locales.
    ///
    /// Every top-level key must be a table named by a valid language
    /// identifier, and no two keys may name the same locale once trimmed.
    /// Non-text leaves are logged and left out of lookups.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogueError> {
        let raw: BTreeMap<String, Entry> = toml::from_str(source)?;
        let mut locales = BTreeMap::new();

        for (name, entry) in raw {
            let (Some(locale), Entry::Table(tree)) = (Locale::parse(&name), entry) else {
                return Err(CatalogueError::MalformedTable { entry: name });
            };
            if locale.language_identifier().is_err() {
                return Err(CatalogueError::InvalidLocale { locale: name });
            }
            warn_non_text(&locale, "", &tree);

            match locales.entry(locale) {
                btree_map::Entry::Occupied(existing) => {
                    return Err(CatalogueError::DuplicateLocale {
                        locale: existing.key().to_string(),
                    });
                }
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(tree);
                }
            }
        }

        Ok(Self { locales })
    }

    /// Locales with at least one entry, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.locales.keys()
    }

    /// Store `value` under dotted `key` for `locale`.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: &str,
        value: &str,
    ) -> Result<(), CatalogueError> {
        let conflict = || CatalogueError::KeyConflict {
            locale: locale.to_string(),
            key: key.to_owned(),
        };
        let mut segments: Vec<&str> = split_segments(&[], key).collect();
        let leaf = segments.pop().ok_or_else(conflict)?;

        let mut node = self.locales.entry(locale.clone()).or_default();
        for segment in segments {
            let child = node
                .entry(segment.to_owned())
                .or_insert_with(|| Entry::Table(BTreeMap::new()));
            node = match child {
                Entry::Table(children) => children,
                Entry::Text(_) | Entry::Other(_) => return Err(conflict()),
            };
        }

        if matches!(node.get(leaf), Some(Entry::Table(_))) {
            return Err(conflict());
        }
        node.insert(leaf.to_owned(), Entry::Text(value.to_owned()));
        Ok(())
    }

    /// Look up `key` under `scope` in a single locale.
    ///
    /// Returns `None` for a blank key, an unknown locale, or a key that names
    /// a branch rather than a message.
    ///
    /// ```
    /// use common::i18n::{Locale, TranslationTable};
    ///
    /// let table = TranslationTable::from_toml_str(
    ///     "[en.number.currency]\nformat = \"%u%n\"\n",
    /// ).unwrap();
    /// let en = Locale::parse("en").unwrap();
    ///
    /// assert_eq!(table.lookup(&en, "currency.format", &["number"]), Some("%u%n"));
    /// assert_eq!(table.lookup(&en, "format", &["number.currency"]), Some("%u%n"));
    /// assert_eq!(table.lookup(&en, "currency", &["number"]), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, locale: &Locale, key: &str, scope: &[&str]) -> Option<&str> {
        if key.trim().is_empty() {
            return None;
        }
        let mut segments = split_segments(scope, key);
        let first = segments.next()?;
        self.locales.get(locale)?.get(first)?.find(segments)
    }

    /// Look up `key` under `scope`, falling back along `chain`.
    ///
    /// Blank text counts as missing, so a locale holding `""` or whitespace
    /// defers to the next one in the chain. Keys naming a branch, or a
    /// non-text leaf, are missing in every locale. Use
    /// [`TranslationTable::resolve_with`] to accept blank text.
    #[must_use]
    pub fn resolve(
        &self,
        chain: &LocaleChain,
        key: &str,
        scope: &[&str],
    ) -> Option<ResolvedValue<&str>> {
        self.resolve_with(chain, key, scope, |text: &&str| text.is_present())
    }

    /// Look up `key` under `scope`, keeping the first text `is_present` accepts.
    ///
    /// ```
    /// use common::i18n::{LocaleSettings, TranslationTable};
    ///
    /// let table = TranslationTable::from_toml_str(
    ///     "[en]\ntitle = \"Home\"\n\n[fr]\ntitle = \"\"\n",
    /// ).unwrap();
    /// let settings = LocaleSettings::new("en", ["en", "fr"]).unwrap();
    /// let chain = settings.chain_for(Some("fr"));
    ///
    /// let stored = table.resolve_with(&chain, "title", &[], |_| true).unwrap();
    /// assert_eq!(stored.locale(), "fr");
    /// assert_eq!(*stored.value(), "");
    /// ```
    #[must_use]
    pub fn resolve_with<P>(
        &self,
        chain: &LocaleChain,
        key: &str,
        scope: &[&str],
        is_present: P,
    ) -> Option<ResolvedValue<&str>>
    where
        P: Fn(&&str) -> bool,
    {
        resolve_with(chain, |locale| self.lookup(locale, key, scope), is_present)
    }
}

fn warn_non_text(locale: &Locale, prefix: &str, tree: &BTreeMap<String, Entry>) {
    for (key, entry) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match entry {
            Entry::Text(_) => {}
            Entry::Table(children) => warn_non_text(locale, &path, children),
            Entry::Other(value) => warn!(
                target: CATALOGUE_TARGET,
                "ignoring {} value at `{path}` for `{locale}`",
                value.type_str()
            ),
        }
    }
}

fn split_segments<'a>(scope: &'a [&'a str], key: &'a str) -> impl Iterator<Item = &'a str> {
    scope
        .iter()
        .copied()
        .chain(iter::once(key))
        .flat_map(|part| part.split('.'))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
