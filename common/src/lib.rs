//! Locale fallback resolution shared by the translated-fields workspace.
//!
//! The [`i18n`] module builds locale priority chains, walks them with a
//! caller-supplied accessor, and tags the first present value with the locale
//! that supplied it. Record and catalogue backends are layered on top.

pub mod i18n;

pub use i18n::{
    CatalogueError, ConfigurationError, FallbackResolver, FieldSource, FluentCatalogue, Locale,
    LocaleChain, LocaleSettings, Presence, ResolvedValue, TranslatedFields, TranslationTable,
    column_name, normalise_locale, read_translated, resolve, resolve_with, translated_columns,
    try_resolve,
};
