//! Records that store one column per locale.
//!
//! A translated field `title` lives in columns `title_en`, `title_fr`, and so
//! on. Reading the field walks the locale chain over those columns. A record
//! without a column for some locale simply contributes nothing for it.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::debug;

use super::{LocaleChain, LocaleSettings, RESOLVE_TARGET, ResolvedValue, resolve};

/// Name of the column holding `field` in `locale`.
///
/// ```
/// use common::i18n::column_name;
///
/// assert_eq!(column_name("title", "fr"), "title_fr");
/// ```
#[must_use]
pub fn column_name(field: &str, locale: &str) -> String {
    format!("{field}_{locale}")
}

/// Every per-locale column for every field, grouped by field.
#[must_use]
pub fn translated_columns<F, L>(fields: &[F], locales: &[L]) -> Vec<String>
where
    F: AsRef<str>,
    L: AsRef<str>,
{
    fields
        .iter()
        .flat_map(|field| {
            locales
                .iter()
                .map(move |locale| column_name(field.as_ref(), locale.as_ref()))
        })
        .collect()
}

/// A record exposing raw column values by name.
pub trait FieldSource {
    /// Value of `column`, or `None` when the record has no such column.
    fn field_value(&self, column: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field_value(&self, column: &str) -> Option<&str> {
        self.get(column).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, column: &str) -> Option<&str> {
        self.get(column).map(String::as_str)
    }
}

/// Read translated `field` from `record`, walking `chain`.
pub fn read_translated<'r, R>(
    record: &'r R,
    field: &str,
    chain: &LocaleChain,
) -> Option<ResolvedValue<&'r str>>
where
    R: FieldSource + ?Sized,
{
    resolve(chain, |locale| {
        record.field_value(&column_name(field, locale.as_str()))
    })
}

/// The set of fields a record type declares as translated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatedFields {
    fields: Vec<String>,
}

impl TranslatedFields {
    /// Declare `fields` as translated, ignoring blanks and repeats.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut declared: Vec<String> = Vec::new();
        for field in fields {
            let name = field.as_ref().trim();
            if !name.is_empty() && !declared.iter().any(|existing| existing == name) {
                declared.push(name.to_owned());
            }
        }
        Self { fields: declared }
    }

    /// The declared field names in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether `field` is declared as translated.
    #[must_use]
    pub fn is_translated(&self, field: &str) -> bool {
        self.fields.iter().any(|declared| declared == field)
    }

    /// Every column the declared fields need under `settings`.
    #[must_use]
    pub fn columns(&self, settings: &LocaleSettings) -> Vec<String> {
        translated_columns(&self.fields, settings.available_locales())
    }

    /// Read declared `field` from `record`; undeclared fields yield `None`.
    pub fn read<'r, R>(
        &self,
        record: &'r R,
        field: &str,
        chain: &LocaleChain,
    ) -> Option<ResolvedValue<&'r str>>
    where
        R: FieldSource + ?Sized,
    {
        if !self.is_translated(field) {
            debug!(target: RESOLVE_TARGET, "`{field}` is not a translated field");
            return None;
        }
        read_translated(record, field, chain)
    }
}
