//! Error types for decoding and typed lookups.

use crate::value::ValueKind;
use thiserror::Error;

/// Why a single raw value could not be converted to the requested type.
///
/// Produced by the coercion engine, which knows nothing about keys or paths.
/// Accessors wrap it in [`JsonMapError::Coerce`] together with the key path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoerceError {
    /// The raw value's category does not match the requested type
    /// (e.g. a bool where a string was asked for).
    #[error("type error: got {actual} but expected {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: ValueKind,
    },

    /// An exact numeric token could not be parsed as the requested kind
    /// (overflow, fractional text for an integer, malformed text).
    #[error("cannot parse number {text} as {target}: {reason}")]
    NumericParse {
        target: &'static str,
        text: String,
        reason: String,
    },

    /// An array element failed coercion. Only the first failure is reported.
    #[error("index {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<CoerceError>,
    },
}

/// Errors that can occur while decoding or reading a [`crate::JsonMap`].
#[derive(Error, Debug)]
pub enum JsonMapError {
    /// The input was not valid JSON, or its root was not an object.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value was present at `path` but could not be converted.
    #[error("key {path}: {source}")]
    Coerce {
        path: String,
        #[source]
        source: CoerceError,
    },

    /// A value at `path` was expected to be an object but was not.
    /// During path traversal `path` is the prefix that stopped the walk.
    #[error("key {path} type {actual} is not map")]
    NotAMap { path: String, actual: ValueKind },

    /// A recursive accessor was called with no path segments.
    #[error("key path is empty")]
    EmptyPath,

    /// A deep merge was asked to write into a null destination.
    #[error("merge destination must not be null")]
    NullDestination,
}

impl JsonMapError {
    /// The underlying coercion failure, if this error came from one.
    pub fn coerce_error(&self) -> Option<&CoerceError> {
        match self {
            JsonMapError::Coerce { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias used throughout jsonmap.
pub type Result<T> = std::result::Result<T, JsonMapError>;
