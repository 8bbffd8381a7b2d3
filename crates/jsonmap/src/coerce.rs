//! Type coercion engine: untyped [`Value`] → concrete Rust type.
//!
//! The target type is picked statically through the [`Coerce`] trait. The
//! accessors on [`crate::JsonMap`] infer it from the default argument, so
//! `jm.get_as("port", 8080u32)`-style calls read naturally while sharing one
//! conversion core.
//!
//! # Numbers
//!
//! How a number converts depends on how it was decoded:
//!
//! | raw                 | target            | behavior                                   |
//! |---------------------|-------------------|--------------------------------------------|
//! | `Number::Float(f)`  | any numeric type  | `f as T`; never fails, truncates/saturates |
//! | `Number::Exact(s)`  | integer type      | strict base-10 parse; fractions fail       |
//! | `Number::Exact(s)`  | `f32` / `f64`     | parse; non-finite results fail             |
//!
//! Everything else must match categories exactly.

use crate::error::CoerceError;
use crate::map::JsonMap;
use crate::value::{Map, Number, Value};

/// A type that can be extracted from an untyped [`Value`].
pub trait Coerce: Sized {
    /// Human-readable target name used in [`CoerceError::TypeMismatch`].
    const TYPE_NAME: &'static str;

    /// Convert `raw` into `Self`, or explain why it cannot be done.
    fn coerce(raw: &Value) -> Result<Self, CoerceError>;
}

/// Coerce `raw` to the type of `default`.
///
/// On failure the default is handed back alongside the error, so the first
/// element of the pair is always usable.
///
/// ```
/// use jsonmap::{coerce_or, Number, Value};
///
/// let raw = Value::Number(Number::Exact("1.3".into()));
/// let (v, err) = coerce_or(&raw, 7i64);
/// assert_eq!(v, 7);
/// assert!(err.is_some());
/// ```
pub fn coerce_or<T: Coerce>(raw: &Value, default: T) -> (T, Option<CoerceError>) {
    match T::coerce(raw) {
        Ok(v) => (v, None),
        Err(e) => (default, Some(e)),
    }
}

fn mismatch<T: Coerce>(raw: &Value) -> CoerceError {
    CoerceError::TypeMismatch {
        expected: T::TYPE_NAME,
        actual: raw.kind(),
    }
}

impl Coerce for Value {
    const TYPE_NAME: &'static str = "value";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        Ok(raw.clone())
    }
}

impl Coerce for String {
    const TYPE_NAME: &'static str = "string";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl Coerce for bool {
    const TYPE_NAME: &'static str = "bool";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        match raw {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl Coerce for Map {
    const TYPE_NAME: &'static str = "object";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        match raw {
            Value::Object(map) => Ok(map.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl Coerce for JsonMap {
    const TYPE_NAME: &'static str = "object";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        Map::coerce(raw).map(JsonMap::from)
    }
}

/// `null` is the only value that matches an absent witness.
impl<T: Coerce> Coerce for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        match raw {
            Value::Null => Ok(None),
            other => T::coerce(other).map(Some),
        }
    }
}

/// Arrays coerce element by element and stop at the first failure.
impl<T: Coerce> Coerce for Vec<T> {
    const TYPE_NAME: &'static str = "array";

    fn coerce(raw: &Value) -> Result<Self, CoerceError> {
        let items = match raw {
            Value::Array(items) => items,
            other => return Err(mismatch::<Self>(other)),
        };
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match T::coerce(item) {
                Ok(v) => out.push(v),
                Err(e) => {
                    return Err(CoerceError::Element {
                        index,
                        source: Box::new(e),
                    })
                }
            }
        }
        Ok(out)
    }
}

fn parse_error(target: &'static str, text: &str, reason: impl ToString) -> CoerceError {
    CoerceError::NumericParse {
        target,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

macro_rules! coerce_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Coerce for $ty {
                const TYPE_NAME: &'static str = $name;

                fn coerce(raw: &Value) -> Result<Self, CoerceError> {
                    match raw {
                        Value::Number(Number::Float(f)) => Ok(*f as $ty),
                        Value::Number(Number::Exact(text)) => text
                            .parse::<$ty>()
                            .map_err(|e| parse_error($name, text, e)),
                        other => Err(mismatch::<Self>(other)),
                    }
                }
            }
        )*
    };
}

macro_rules! coerce_float {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Coerce for $ty {
                const TYPE_NAME: &'static str = $name;

                fn coerce(raw: &Value) -> Result<Self, CoerceError> {
                    match raw {
                        Value::Number(Number::Float(f)) => Ok(*f as $ty),
                        Value::Number(Number::Exact(text)) => {
                            let v = text
                                .parse::<$ty>()
                                .map_err(|e| parse_error($name, text, e))?;
                            if v.is_finite() {
                                Ok(v)
                            } else {
                                Err(parse_error($name, text, "value out of range"))
                            }
                        }
                        other => Err(mismatch::<Self>(other)),
                    }
                }
            }
        )*
    };
}

coerce_integer!(
    i64 => "i64",
    u64 => "u64",
    i32 => "i32",
    u32 => "u32",
    isize => "isize",
    usize => "usize",
);

coerce_float!(f64 => "f64", f32 => "f32");
