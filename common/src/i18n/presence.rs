//! Per-type notion of a "present" value.
//!
//! Resolution skips values that exist but carry nothing worth showing. Text is
//! blank when it is empty or only whitespace; collections are blank when empty.
//! Types without a natural rule implement [`Presence`] themselves or pass an
//! explicit predicate to [`super::resolve_with`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Whether a looked-up value should satisfy a resolution.
pub trait Presence {
    /// Return `true` when the value is non-blank.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        self.chars().any(|character| !character.is_whitespace())
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl Presence for Cow<'_, str> {
    fn is_present(&self) -> bool {
        self.as_ref().is_present()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}
