//! Shared support for behaviour-driven suites.
//!
//! Exposes step parameter parsers so scenarios can describe locale lists in
//! plain text.

pub mod steps;
