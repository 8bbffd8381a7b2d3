//! The result of every accessor on [`crate::JsonMap`].

use crate::error::{JsonMapError, Result};

/// Outcome of a lookup: the value to use, whether the key (or path) was
/// present, and any error encountered.
///
/// `value` is always usable. When `error` is set, or when the key is missing,
/// it is the default the caller passed in.
///
/// `found` tells whether the key or path resolved to a raw value, regardless
/// of whether that value converted. A path that is cut short by a non-object
/// segment never reaches its last key and so reports `found == false`.
#[derive(Debug)]
#[must_use]
pub struct Lookup<T> {
    pub value: T,
    pub found: bool,
    pub error: Option<JsonMapError>,
}

impl<T> Lookup<T> {
    pub(crate) fn hit(value: T) -> Self {
        Self {
            value,
            found: true,
            error: None,
        }
    }

    pub(crate) fn miss(default: T) -> Self {
        Self {
            value: default,
            found: false,
            error: None,
        }
    }

    pub(crate) fn failed(default: T, found: bool, error: JsonMapError) -> Self {
        log::debug!("lookup fell back to default: {error}");
        Self {
            value: default,
            found,
            error: Some(error),
        }
    }

    /// True when no error occurred (the key may still be missing).
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Split into the `(value, found, error)` triple.
    pub fn into_parts(self) -> (T, bool, Option<JsonMapError>) {
        (self.value, self.found, self.error)
    }

    /// `Ok(Some(v))` when found and converted, `Ok(None)` when missing,
    /// `Err` when present but unusable. The default is discarded.
    pub fn into_result(self) -> Result<Option<T>> {
        match self.error {
            Some(e) => Err(e),
            None if self.found => Ok(Some(self.value)),
            None => Ok(None),
        }
    }

    /// Transform the value, keeping `found` and `error`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        Lookup {
            value: f(self.value),
            found: self.found,
            error: self.error,
        }
    }
}
