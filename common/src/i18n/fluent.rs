//! Fluent message catalogues as resolution accessors.
//!
//! Each locale gets its own bundle and lookups never cross locales inside
//! Fluent, so the fallback walk stays in [`super::resolve`] where the supplying
//! locale is recorded. Isolation marks are disabled because resolved values are
//! handed to callers as plain text.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use fluent_templates::fluent_bundle::concurrent::FluentBundle;
use fluent_templates::fluent_bundle::{FluentArgs, FluentResource};
use log::{debug, warn};

use super::{CATALOGUE_TARGET, CatalogueError, Locale, LocaleChain, ResolvedValue, resolve};

/// Fluent bundles keyed by locale.
#[derive(Default)]
pub struct FluentCatalogue {
    bundles: BTreeMap<Locale, FluentBundle<FluentResource>>,
}

impl fmt::Debug for FluentCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentCatalogue")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FluentCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` as Fluent and add it to the bundle for `locale`.
    ///
    /// ```
    /// use common::i18n::{FluentCatalogue, Locale};
    ///
    /// let mut catalogue = FluentCatalogue::new();
    /// let fr = Locale::parse("fr").unwrap();
    /// catalogue.add_source(fr.clone(), "greeting = Bonjour\n").unwrap();
    ///
    /// assert_eq!(catalogue.message(&fr, "greeting").as_deref(), Some("Bonjour"));
    /// ```
    pub fn add_source(
        &mut self,
        locale: Locale,
        source: impl Into<String>,
    ) -> Result<(), CatalogueError> {
        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            CatalogueError::Fluent {
                locale: locale.to_string(),
                reason: format!("{errors:?}"),
            }
        })?;

        let bundle = match self.bundles.entry(locale.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let identifier = locale.language_identifier().map_err(|_| {
                    CatalogueError::InvalidLocale {
                        locale: locale.to_string(),
                    }
                })?;
                let mut bundle = FluentBundle::new_concurrent(vec![identifier]);
                bundle.set_use_isolating(false);
                entry.insert(bundle)
            }
        };

        bundle
            .add_resource(resource)
            .map_err(|errors| CatalogueError::Fluent {
                locale: locale.to_string(),
                reason: format!("{errors:?}"),
            })
    }

    /// Load every `<locale>/*.ftl` file beneath `root`.
    ///
    /// Directories whose names are not valid language identifiers are skipped
    /// with a warning. Files within a locale are added in sorted path order.
    pub fn load_dir(root: &Utf8Path) -> Result<Self, CatalogueError> {
        let pattern = format!("{}/*/*.ftl", glob::Pattern::escape(root.as_str()));
        let mut paths: Vec<Utf8PathBuf> = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = match entry {
                Ok(path) => path,
                Err(error) => {
                    warn!(target: CATALOGUE_TARGET, "skipping unreadable catalogue entry: {error}");
                    continue;
                }
            };
            match Utf8PathBuf::from_path_buf(path) {
                Ok(utf8) => paths.push(utf8),
                Err(raw) => {
                    warn!(target: CATALOGUE_TARGET, "skipping non-UTF-8 path {}", raw.display());
                }
            }
        }
        paths.sort();

        let mut catalogue = Self::new();
        for path in paths {
            let Some(locale) = locale_for(&path) else {
                warn!(target: CATALOGUE_TARGET, "skipping {path}: directory is not a locale");
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|source| CatalogueError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(target: CATALOGUE_TARGET, "loading {path} for `{locale}`");
            catalogue.add_source(locale, source)?;
        }

        Ok(catalogue)
    }

    /// Locales with a bundle, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    /// Format message `id` in exactly `locale`.
    #[must_use]
    pub fn message(&self, locale: &Locale, id: &str) -> Option<String> {
        self.format(locale, id, None)
    }

    /// Format message `id` with arguments in exactly `locale`.
    #[must_use]
    pub fn message_with_args(
        &self,
        locale: &Locale,
        id: &str,
        args: &FluentArgs<'_>,
    ) -> Option<String> {
        self.format(locale, id, Some(args))
    }

    /// Format message `id`, falling back along `chain`.
    #[must_use]
    pub fn resolve(&self, chain: &LocaleChain, id: &str) -> Option<ResolvedValue<String>> {
        resolve(chain, |locale| self.message(locale, id))
    }

    /// Format message `id` with arguments, falling back along `chain`.
    #[must_use]
    pub fn resolve_with_args(
        &self,
        chain: &LocaleChain,
        id: &str,
        args: &FluentArgs<'_>,
    ) -> Option<ResolvedValue<String>> {
        resolve(chain, |locale| self.message_with_args(locale, id, args))
    }

    fn format(&self, locale: &Locale, id: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(id)?.value()?;
        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            debug!(
                target: CATALOGUE_TARGET,
                "formatting `{id}` for `{locale}` reported {errors:?}",
            );
        }
        Some(formatted.into_owned())
    }
}

fn locale_for(path: &Utf8Path) -> Option<Locale> {
    let locale = Locale::parse(path.parent()?.file_name()?)?;
    locale.language_identifier().ok().map(|_| locale)
}
