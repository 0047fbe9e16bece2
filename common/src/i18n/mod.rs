//! Locale fallback resolution for translated fields and catalogues.
//!
//! A [`LocaleChain`] orders the candidate locales for a lookup: the requested
//! locale, then the configured default, then every remaining available locale
//! in declaration order. [`resolve`] walks that chain with a caller-supplied
//! accessor and wraps the first present value in a [`ResolvedValue`] that
//! records which locale supplied it and whether that was a fallback.
//!
//! Configuration is validated once through [`LocaleSettings`] and threaded
//! explicitly into a [`FallbackResolver`]; nothing here reads process-wide
//! locale state.
//!
//! Storage backends plug in as accessors. [`read_translated`] covers records
//! that keep one column per locale (`title_en`, `title_fr`, ...), while
//! [`TranslationTable`] and [`FluentCatalogue`] cover keyed catalogues.

mod catalogue;
mod chain;
mod error;
mod fluent;
mod locale;
mod presence;
mod records;
mod resolver;
mod settings;
pub mod testing;

pub use catalogue::TranslationTable;
pub use chain::LocaleChain;
pub use error::{CatalogueError, ConfigurationError};
pub use fluent::FluentCatalogue;
pub use locale::{Locale, normalise_locale};
pub use presence::Presence;
pub use records::{FieldSource, TranslatedFields, column_name, read_translated, translated_columns};
pub use resolver::{FallbackResolver, ResolvedValue, resolve, resolve_with, try_resolve};
pub use settings::LocaleSettings;

/// Log target used for resolution outcomes.
pub const RESOLVE_TARGET: &str = "translated_fields::resolve";

/// Log target used while loading catalogues.
pub const CATALOGUE_TARGET: &str = "translated_fields::catalogue";
