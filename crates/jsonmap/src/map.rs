//! [`JsonMap`]: typed, default-aware access to a decoded JSON object.
//!
//! Every accessor returns a [`Lookup`] instead of a `Result`, so a missing
//! key, a wrong type and a successful read all hand back a usable value. The
//! accessor families are:
//!
//! - direct, by single key: [`JsonMap::get`], [`JsonMap::get_as`],
//!   [`JsonMap::get_sub_map`], [`JsonMap::get_array`], [`JsonMap::get_array_of`]
//! - recursive, by key path: the same set prefixed with `get_path`
//! - per-type shorthands for string, bool, f64, f32, i64, u64, i32, u32,
//!   isize and usize, in scalar and array form, for both families

use crate::coerce::{coerce_or, Coerce};
use crate::decoder;
use crate::error::{JsonMapError, Result};
use crate::lookup::Lookup;
use crate::merge;
use crate::value::{Map, Value};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// A decoded JSON object with typed accessors.
///
/// Derefs to the underlying [`Map`], so the usual map API (`insert`,
/// `contains_key`, iteration) is available directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonMap(Map);

fn join_path<K: AsRef<str>>(path: &[K]) -> String {
    path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(".")
}

/// Coerce a present raw value, attaching `path` to any error.
fn coerced<T: Coerce>(raw: &Value, default: T, path: impl FnOnce() -> String) -> Lookup<T> {
    match coerce_or(raw, default) {
        (v, None) => Lookup::hit(v),
        (v, Some(source)) => Lookup::failed(
            v,
            true,
            JsonMapError::Coerce {
                path: path(),
                source,
            },
        ),
    }
}

impl JsonMap {
    /// An empty map.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Borrow the underlying [`Map`].
    pub fn as_map(&self) -> &Map {
        &self.0
    }

    /// Unwrap into the underlying [`Map`].
    pub fn into_map(self) -> Map {
        self.0
    }

    /// Independent copy; see [`merge::deep_copy`].
    pub fn deep_copy(&self) -> JsonMap {
        JsonMap(merge::deep_copy(&self.0))
    }

    /// Recursively merge `src` into `self`, `src` winning on conflicts.
    /// See [`merge::deep_merge`].
    pub fn merge(&mut self, src: &JsonMap) {
        merge::deep_merge(&mut self.0, &src.0);
    }

    // ------------------------------------------------------------------
    // Direct access
    // ------------------------------------------------------------------

    /// Raw value under `key`, no type check.
    pub fn get(&self, key: &str, default: Value) -> Lookup<Value> {
        match self.0.get(key) {
            Some(raw) => Lookup::hit(raw.clone()),
            None => Lookup::miss(default),
        }
    }

    /// Value under `key` converted to the type of `default`.
    ///
    /// ```
    /// let jm = jsonmap::decode(r#"{"f": 1.3}"#, false).unwrap();
    /// assert_eq!(jm.get_as("f", 0i32).value, 1); // truncated, no error
    ///
    /// let jm = jsonmap::decode(r#"{"f": 1.3}"#, true).unwrap();
    /// let got = jm.get_as("f", -1i32);
    /// assert_eq!(got.value, -1);
    /// assert!(got.found && got.error.is_some());
    /// ```
    pub fn get_as<T: Coerce>(&self, key: &str, default: T) -> Lookup<T> {
        match self.0.get(key) {
            Some(raw) => coerced(raw, default, || key.to_string()),
            None => Lookup::miss(default),
        }
    }

    /// Nested object under `key`.
    ///
    /// A present value that is not an object yields `found == true` plus a
    /// [`JsonMapError::NotAMap`] error.
    pub fn get_sub_map(&self, key: &str, default: JsonMap) -> Lookup<JsonMap> {
        match self.0.get(key) {
            Some(Value::Object(map)) => Lookup::hit(JsonMap(map.clone())),
            Some(other) => Lookup::failed(
                default,
                true,
                JsonMapError::NotAMap {
                    path: key.to_string(),
                    actual: other.kind(),
                },
            ),
            None => Lookup::miss(default),
        }
    }

    /// Array under `key`; elements are returned untyped.
    pub fn get_array(&self, key: &str, default: Vec<Value>) -> Lookup<Vec<Value>> {
        self.get_as(key, default)
    }

    /// Array under `key` with every element converted to `T`.
    ///
    /// The first element that fails aborts the whole read: the default is
    /// returned and the error names the failing index.
    pub fn get_array_of<T: Coerce>(&self, key: &str, default: Vec<T>) -> Lookup<Vec<T>> {
        self.get_as(key, default)
    }

    // ------------------------------------------------------------------
    // Recursive access
    // ------------------------------------------------------------------

    /// Walk `path` through nested objects.
    ///
    /// `Ok(None)` when some segment is missing, `Err` for an empty path or a
    /// non-object in the middle of the walk.
    fn resolve<K: AsRef<str>>(&self, path: &[K]) -> Result<Option<&Value>> {
        let (last, parents) = path.split_last().ok_or(JsonMapError::EmptyPath)?;
        let mut node = &self.0;
        for (depth, segment) in parents.iter().enumerate() {
            match node.get(segment.as_ref()) {
                Some(Value::Object(child)) => node = child,
                Some(other) => {
                    return Err(JsonMapError::NotAMap {
                        path: join_path(&path[..=depth]),
                        actual: other.kind(),
                    })
                }
                None => return Ok(None),
            }
        }
        Ok(node.get(last.as_ref()))
    }

    /// Raw value at `path`, no type check.
    ///
    /// ```
    /// use jsonmap::Value;
    ///
    /// let jm = jsonmap::decode(r#"{"a":{"b":{"s":"str"}}}"#, false).unwrap();
    /// assert_eq!(jm.get_path(&["a", "b", "s"], Value::Null).value, Value::from("str"));
    /// assert!(jm.get_path::<&str>(&[], Value::Null).error.is_some());
    /// ```
    pub fn get_path<K: AsRef<str>>(&self, path: &[K], default: Value) -> Lookup<Value> {
        match self.resolve(path) {
            Ok(Some(raw)) => Lookup::hit(raw.clone()),
            Ok(None) => Lookup::miss(default),
            Err(e) => Lookup::failed(default, false, e),
        }
    }

    /// Value at `path` converted to the type of `default`.
    pub fn get_path_as<T: Coerce, K: AsRef<str>>(&self, path: &[K], default: T) -> Lookup<T> {
        match self.resolve(path) {
            Ok(Some(raw)) => coerced(raw, default, || join_path(path)),
            Ok(None) => Lookup::miss(default),
            Err(e) => Lookup::failed(default, false, e),
        }
    }

    /// Nested object at `path`. Same `found` rules as [`JsonMap::get_sub_map`]
    /// for the last segment, and as [`JsonMap::get_path`] for the others.
    pub fn get_path_sub_map<K: AsRef<str>>(
        &self,
        path: &[K],
        default: JsonMap,
    ) -> Lookup<JsonMap> {
        match self.resolve(path) {
            Ok(Some(Value::Object(map))) => Lookup::hit(JsonMap(map.clone())),
            Ok(Some(other)) => Lookup::failed(
                default,
                true,
                JsonMapError::NotAMap {
                    path: join_path(path),
                    actual: other.kind(),
                },
            ),
            Ok(None) => Lookup::miss(default),
            Err(e) => Lookup::failed(default, false, e),
        }
    }

    /// Array at `path`; elements are returned untyped.
    pub fn get_path_array<K: AsRef<str>>(
        &self,
        path: &[K],
        default: Vec<Value>,
    ) -> Lookup<Vec<Value>> {
        self.get_path_as(path, default)
    }

    /// Array at `path` with every element converted to `T`. Same failure
    /// rules as [`JsonMap::get_array_of`].
    pub fn get_path_array_of<T: Coerce, K: AsRef<str>>(
        &self,
        path: &[K],
        default: Vec<T>,
    ) -> Lookup<Vec<T>> {
        self.get_path_as(path, default)
    }

    // ------------------------------------------------------------------
    // Strings take `impl Into<String>` so `""` works as a default.
    // ------------------------------------------------------------------

    /// [`JsonMap::get_as`] for `String`.
    pub fn get_string(&self, key: &str, default: impl Into<String>) -> Lookup<String> {
        self.get_as(key, default.into())
    }

    /// [`JsonMap::get_path_as`] for `String`.
    pub fn get_path_string<K: AsRef<str>>(
        &self,
        path: &[K],
        default: impl Into<String>,
    ) -> Lookup<String> {
        self.get_path_as(path, default.into())
    }

    /// [`JsonMap::get_array_of`] for `String`.
    pub fn get_string_array(&self, key: &str, default: Vec<String>) -> Lookup<Vec<String>> {
        self.get_array_of(key, default)
    }

    /// [`JsonMap::get_path_array_of`] for `String`.
    pub fn get_path_string_array<K: AsRef<str>>(
        &self,
        path: &[K],
        default: Vec<String>,
    ) -> Lookup<Vec<String>> {
        self.get_path_array_of(path, default)
    }
}

macro_rules! typed_getters {
    ($($ty:ty => $get:ident, $get_path:ident, $get_array:ident, $get_path_array:ident;)*) => {
        impl JsonMap {
            $(
                #[doc = concat!("[`JsonMap::get_as`] for `", stringify!($ty), "`.")]
                pub fn $get(&self, key: &str, default: $ty) -> Lookup<$ty> {
                    self.get_as(key, default)
                }

                #[doc = concat!("[`JsonMap::get_path_as`] for `", stringify!($ty), "`.")]
                pub fn $get_path<K: AsRef<str>>(&self, path: &[K], default: $ty) -> Lookup<$ty> {
                    self.get_path_as(path, default)
                }

                #[doc = concat!("[`JsonMap::get_array_of`] for `", stringify!($ty), "`.")]
                pub fn $get_array(&self, key: &str, default: Vec<$ty>) -> Lookup<Vec<$ty>> {
                    self.get_array_of(key, default)
                }

                #[doc = concat!("[`JsonMap::get_path_array_of`] for `", stringify!($ty), "`.")]
                pub fn $get_path_array<K: AsRef<str>>(
                    &self,
                    path: &[K],
                    default: Vec<$ty>,
                ) -> Lookup<Vec<$ty>> {
                    self.get_path_array_of(path, default)
                }
            )*
        }
    };
}

typed_getters! {
    bool => get_bool, get_path_bool, get_bool_array, get_path_bool_array;
    f64 => get_f64, get_path_f64, get_f64_array, get_path_f64_array;
    f32 => get_f32, get_path_f32, get_f32_array, get_path_f32_array;
    i64 => get_i64, get_path_i64, get_i64_array, get_path_i64_array;
    u64 => get_u64, get_path_u64, get_u64_array, get_path_u64_array;
    i32 => get_i32, get_path_i32, get_i32_array, get_path_i32_array;
    u32 => get_u32, get_path_u32, get_u32_array, get_path_u32_array;
    isize => get_isize, get_path_isize, get_isize_array, get_path_isize_array;
    usize => get_usize, get_path_usize, get_usize_array, get_path_usize_array;
}

impl Deref for JsonMap {
    type Target = Map;

    fn deref(&self) -> &Map {
        &self.0
    }
}

impl DerefMut for JsonMap {
    fn deref_mut(&mut self) -> &mut Map {
        &mut self.0
    }
}

impl From<Map> for JsonMap {
    fn from(map: Map) -> Self {
        Self(map)
    }
}

impl From<JsonMap> for Map {
    fn from(jm: JsonMap) -> Self {
        jm.0
    }
}

impl From<JsonMap> for Value {
    fn from(jm: JsonMap) -> Self {
        Value::Object(jm.0)
    }
}

impl FromIterator<(String, Value)> for JsonMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decodes in float mode, like a plain JSON decoder.
impl FromStr for JsonMap {
    type Err = JsonMapError;

    fn from_str(s: &str) -> Result<Self> {
        decoder::decode(s, false)
    }
}

impl Serialize for JsonMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for JsonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        write!(f, "JsonMap({json})")
    }
}
