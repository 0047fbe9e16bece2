//! Locale-aware fallback resolution for translated record fields.
//!
//! The resolution core lives in the `common` crate and is re-exported here.
//! This crate adds the configuration surface: [`FallbackConfig`] reads the
//! default and available locales from TOML and validates them once, yielding a
//! ready [`FallbackResolver`].

pub mod config;

pub use common::i18n::{
    CatalogueError, ConfigurationError, FallbackResolver, FieldSource, FluentCatalogue, Locale,
    LocaleChain, LocaleSettings, Presence, ResolvedValue, TranslatedFields, TranslationTable,
    column_name, read_translated, resolve, resolve_with, translated_columns, try_resolve,
};
pub use config::{ConfigError, FallbackConfig};
