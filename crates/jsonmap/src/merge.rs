//! Deep copy and deep merge for [`Map`] trees.

use crate::error::{JsonMapError, Result};
use crate::value::{Map, Value};

const ROOT: &str = "(root)";

/// Copy `map`, recursing into nested objects.
///
/// Values are owned, so the copy shares nothing with the original: mutating
/// either side is never visible through the other.
pub fn deep_copy(map: &Map) -> Map {
    map.iter()
        .map(|(key, value)| {
            let copied = match value {
                Value::Object(child) => Value::Object(deep_copy(child)),
                other => other.clone(),
            };
            (key.clone(), copied)
        })
        .collect()
}

/// Merge `src` into `dst`, overwriting on conflict.
///
/// When both sides hold an object under the same key the objects are merged
/// recursively. In every other case the `src` value replaces the `dst` value
/// outright, even when that swaps an object for a scalar. Keys only present in
/// `dst` are left alone. Merging the same `src` twice is the same as once.
///
/// ```
/// use jsonmap::{deep_merge, Value};
///
/// let mut dst = jsonmap::decode(r#"{"a":{"x":1,"y":2},"b":true}"#, false).unwrap();
/// let src = jsonmap::decode(r#"{"a":{"y":3,"z":4},"b":"no"}"#, false).unwrap();
/// deep_merge(&mut dst, &src);
/// assert_eq!(dst.get_path_i64(&["a", "x"], 0).value, 1);
/// assert_eq!(dst.get_path_i64(&["a", "y"], 0).value, 3);
/// assert_eq!(dst.get("b", Value::Null).value, Value::from("no"));
/// ```
pub fn deep_merge(dst: &mut Map, src: &Map) {
    for (key, src_value) in src {
        if let Value::Object(src_child) = src_value {
            if let Some(Value::Object(dst_child)) = dst.get_mut(key) {
                deep_merge(dst_child, src_child);
                continue;
            }
        }
        dst.insert(key.clone(), src_value.clone());
    }
}

/// [`deep_merge`] for values that may be null.
///
/// # Errors
///
/// - [`JsonMapError::NullDestination`] if `dst` is null
/// - [`JsonMapError::NotAMap`] if `dst` or a non-null `src` is not an object
///
/// A null `src` is a no-op.
pub fn deep_merge_value(dst: &mut Value, src: &Value) -> Result<()> {
    let dst_map = match dst {
        Value::Null => return Err(JsonMapError::NullDestination),
        Value::Object(map) => map,
        other => {
            return Err(JsonMapError::NotAMap {
                path: ROOT.to_string(),
                actual: other.kind(),
            })
        }
    };
    match src {
        Value::Null => Ok(()),
        Value::Object(src_map) => {
            deep_merge(dst_map, src_map);
            Ok(())
        }
        other => Err(JsonMapError::NotAMap {
            path: ROOT.to_string(),
            actual: other.kind(),
        }),
    }
}
