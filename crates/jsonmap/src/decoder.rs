//! Decode boundary: JSON text → [`JsonMap`].
//!
//! Parsing itself is delegated to `serde_json` (built with its
//! `arbitrary_precision` feature, so number tokens reach us as text with every
//! digit intact). This module only decides how each number token is stored:
//!
//! - [`NumberMode::Float`] parses every number as `f64` up front, exactly like
//!   a default JSON decoder. Integers above 2^53 silently lose precision.
//! - [`NumberMode::Exact`] keeps the token text and defers parsing until a
//!   typed accessor knows the target width. Parse failures then surface as
//!   lookup errors instead of decode errors. Digits are kept as written but
//!   exponents are normalized to lowercase with an explicit sign (`1E2` is
//!   stored as `1e+2`).
//!
//! The root of the document must be an object.

use crate::error::Result;
use crate::map::JsonMap;
use crate::value::{Map, Number, Value};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// How decoded numbers are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberMode {
    /// Every number becomes an `f64`.
    #[default]
    Float,
    /// Every number keeps its digits as text, with a normalized exponent.
    Exact,
}

impl From<bool> for NumberMode {
    /// `true` selects exact tokens, `false` selects `f64`.
    fn from(exact_numbers: bool) -> Self {
        if exact_numbers {
            NumberMode::Exact
        } else {
            NumberMode::Float
        }
    }
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub numbers: NumberMode,
}

impl DecodeOptions {
    pub fn float() -> Self {
        Self {
            numbers: NumberMode::Float,
        }
    }

    pub fn exact() -> Self {
        Self {
            numbers: NumberMode::Exact,
        }
    }
}

/// Decode a JSON object into a [`JsonMap`].
///
/// `exact_numbers` selects [`NumberMode::Exact`] when true and
/// [`NumberMode::Float`] otherwise.
///
/// # Errors
///
/// Returns [`crate::JsonMapError::Decode`] if the text is not valid JSON, the
/// root is not an object, or (in float mode) a number does not fit a finite
/// `f64`.
///
/// # Examples
///
/// ```
/// let jm = jsonmap::decode(r#"{"id": 7095620078347567873}"#, true).unwrap();
/// assert_eq!(jm.get_i64("id", 0).value, 7095620078347567873);
/// ```
pub fn decode(text: &str, exact_numbers: bool) -> Result<JsonMap> {
    decode_with(
        text,
        &DecodeOptions {
            numbers: exact_numbers.into(),
        },
    )
}

/// Byte-slice variant of [`decode`].
pub fn decode_slice(bytes: &[u8], exact_numbers: bool) -> Result<JsonMap> {
    decode_slice_with(
        bytes,
        &DecodeOptions {
            numbers: exact_numbers.into(),
        },
    )
}

/// Decode with explicit [`DecodeOptions`].
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<JsonMap> {
    decode_slice_with(text.as_bytes(), options)
}

/// Byte-slice variant of [`decode_with`]. Every other entry point ends here.
pub fn decode_slice_with(bytes: &[u8], options: &DecodeOptions) -> Result<JsonMap> {
    log::trace!("decoding {} bytes, numbers: {:?}", bytes.len(), options.numbers);
    let root: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
    convert_root(root, options.numbers)
}

fn convert_root(
    root: serde_json::Map<String, serde_json::Value>,
    mode: NumberMode,
) -> Result<JsonMap> {
    let mut map = Map::new();
    for (key, value) in root {
        map.insert(key, from_serde_value(value, mode)?);
    }
    log::trace!("decoded object with {} top-level keys", map.len());
    Ok(JsonMap::from(map))
}

/// Convert an already-parsed `serde_json::Value` into a [`Value`], storing
/// numbers according to `mode`.
///
/// # Errors
///
/// In float mode, a number token that overflows `f64` is reported as a
/// decode error.
pub fn from_serde_value(value: serde_json::Value, mode: NumberMode) -> Result<Value> {
    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Number(n) => Value::Number(convert_number(&n, mode)?),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| from_serde_value(item, mode))
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_json::Value::Object(obj) => {
            let mut map = Map::new();
            for (key, child) in obj {
                map.insert(key, from_serde_value(child, mode)?);
            }
            Value::Object(map)
        }
    })
}

fn convert_number(n: &serde_json::Number, mode: NumberMode) -> Result<Number> {
    match mode {
        NumberMode::Exact => Ok(Number::Exact(n.to_string())),
        NumberMode::Float => match n.as_f64() {
            Some(f) => Ok(Number::Float(f)),
            None => {
                let msg = format!("number {n} out of range for f64");
                Err(serde_json::Error::custom(msg).into())
            }
        },
    }
}
