//! # jsonmap
//!
//! Typed, default-aware access to decoded JSON objects.
//!
//! A [`JsonMap`] wraps a `string → untyped value` map and lets callers pull
//! out concrete types with a fallback default, walk nested objects by key
//! path, and read homogeneous arrays. Every accessor returns a [`Lookup`]
//! carrying the value, whether the key was found, and any conversion error.
//!
//! Numbers can be decoded two ways. Float mode stores them as `f64` the way
//! most JSON decoders do, which silently rounds integers above 2^53. Exact
//! mode keeps the token text and parses it only when a typed accessor asks
//! for a specific width, so 64-bit IDs survive intact.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonmap::decode;
//!
//! let json = r#"{"id":7095620078347567873,"name":"Alice","tags":["a","b"],"db":{"port":5432}}"#;
//!
//! let jm = decode(json, true).unwrap();
//! assert_eq!(jm.get_i64("id", 0).value, 7095620078347567873);
//! assert_eq!(jm.get_string("name", "").value, "Alice");
//! assert_eq!(jm.get_string_array("tags", vec![]).value, vec!["a", "b"]);
//! assert_eq!(jm.get_path_u32(&["db", "port"], 0).value, 5432);
//!
//! let missing = jm.get_bool("verbose", true);
//! assert!(missing.value && !missing.found && missing.error.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`decoder`]: JSON text → [`JsonMap`], float or exact numbers
//! - [`value`]: the untyped [`Value`] tree
//! - [`coerce`]: [`Value`] → concrete type conversion rules
//! - [`map`]: [`JsonMap`] and its accessors
//! - [`lookup`]: the [`Lookup`] result triple
//! - [`merge`]: deep copy and deep merge
//! - [`error`]: error types

pub mod coerce;
pub mod decoder;
pub mod error;
pub mod lookup;
pub mod map;
pub mod merge;
pub mod value;

pub use coerce::{coerce_or, Coerce};
pub use decoder::{
    decode, decode_slice, decode_slice_with, decode_with, from_serde_value, DecodeOptions,
    NumberMode,
};
pub use error::{CoerceError, JsonMapError, Result};
pub use lookup::Lookup;
pub use map::JsonMap;
pub use merge::{deep_copy, deep_merge, deep_merge_value};
pub use value::{Map, Number, Value, ValueKind};
