//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `steps` helpers (`StepLocales`, `StepText`) that parse step
//! parameters so scenarios can describe locale lists and quoted error
//! snippets in plain text.
pub mod steps;
