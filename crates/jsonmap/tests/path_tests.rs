use jsonmap::{decode, CoerceError, JsonMap, JsonMapError, Value, ValueKind};

const DATA: &str = r#"{"a":{"b":{"i":1,"b":true,"s":"str","f":2.5}},"x":5,"list":[{"k":1}]}"#;

fn both_modes() -> [JsonMap; 2] {
    [decode(DATA, false).unwrap(), decode(DATA, true).unwrap()]
}

// ============================================================================
// Successful walks
// ============================================================================

#[test]
fn reads_typed_leaves() {
    for jm in both_modes() {
        assert_eq!(jm.get_path_isize(&["a", "b", "i"], 0).value, 1);
        assert!(jm.get_path_bool(&["a", "b", "b"], false).value);
        assert_eq!(jm.get_path_string(&["a", "b", "s"], "").value, "str");
        assert_eq!(jm.get_path_f64(&["a", "b", "f"], 0.0).value, 2.5);
        assert_eq!(jm.get_path_f32(&["a", "b", "f"], 0.0).value, 2.5f32);
        assert_eq!(jm.get_path_u32(&["a", "b", "i"], 0).value, 1);
        assert_eq!(jm.get_path_i32(&["a", "b", "i"], 0).value, 1);
        assert_eq!(jm.get_path_u64(&["a", "b", "i"], 0).value, 1);
        assert_eq!(jm.get_path_i64(&["a", "b", "i"], 0).value, 1);
        assert_eq!(jm.get_path_usize(&["a", "b", "i"], 0).value, 1);
    }
}

#[test]
fn get_path_returns_raw_value() {
    let jm = decode(DATA, false).unwrap();
    let got = jm.get_path(&["a", "b", "s"], Value::Null);
    assert!(got.found && got.error.is_none());
    assert_eq!(got.value, Value::from("str"));
}

#[test]
fn single_segment_path_matches_direct_get() {
    for jm in both_modes() {
        assert_eq!(jm.get_path_i64(&["x"], 0).value, jm.get_i64("x", 0).value);
        assert_eq!(jm.get_path(&["a"], Value::Null).value, jm.get("a", Value::Null).value);
    }
}

#[test]
fn accepts_owned_segments() {
    let jm = decode(DATA, true).unwrap();
    let path: Vec<String> = "a.b.i".split('.').map(String::from).collect();
    assert_eq!(jm.get_path_i64(path.as_slice(), 0).value, 1);
}

// ============================================================================
// Missing keys
// ============================================================================

#[test]
fn missing_intermediate_is_not_an_error() {
    for jm in both_modes() {
        let got = jm.get_path_i64(&["a", "zz", "i"], 9);
        assert_eq!(got.value, 9);
        assert!(!got.found);
        assert!(got.error.is_none());
    }
}

#[test]
fn missing_terminal_is_not_an_error() {
    for jm in both_modes() {
        let got = jm.get_path_string(&["a", "b", "zz"], "def");
        assert_eq!(got.value, "def");
        assert!(!got.found && got.error.is_none());
    }
}

// ============================================================================
// Structural and argument errors
// ============================================================================

#[test]
fn scalar_intermediate_is_structural_error() {
    for jm in both_modes() {
        let got = jm.get_path_i64(&["x", "y"], 9);
        assert_eq!(got.value, 9);
        assert!(!got.found, "path never reached its last key");
        assert!(matches!(
            got.error,
            Some(JsonMapError::NotAMap { ref path, actual: ValueKind::Number }) if path == "x"
        ));
    }
}

#[test]
fn structural_error_names_the_prefix() {
    let jm = decode(DATA, false).unwrap();
    let got = jm.get_path(&["a", "b", "s", "deeper", "still"], Value::Null);
    let err = got.error.unwrap();
    assert_eq!(err.to_string(), "key a.b.s type string is not map");
}

#[test]
fn arrays_are_not_traversed() {
    let jm = decode(DATA, false).unwrap();
    let got = jm.get_path_i64(&["list", "0", "k"], 0);
    assert!(matches!(
        got.error,
        Some(JsonMapError::NotAMap { actual: ValueKind::Array, .. })
    ));
}

#[test]
fn empty_path_is_argument_error() {
    let empty: [&str; 0] = [];
    for jm in both_modes() {
        let got = jm.get_path(&empty, Value::Bool(true));
        assert_eq!(got.value, Value::Bool(true));
        assert!(!got.found);
        assert!(matches!(got.error, Some(JsonMapError::EmptyPath)));

        assert!(matches!(
            jm.get_path_i64(&empty, 0).error,
            Some(JsonMapError::EmptyPath)
        ));
        assert!(matches!(
            jm.get_path_array(&empty, vec![]).error,
            Some(JsonMapError::EmptyPath)
        ));
        assert!(matches!(
            jm.get_path_sub_map(&empty, JsonMap::new()).error,
            Some(JsonMapError::EmptyPath)
        ));
    }

    let nothing = JsonMap::new();
    assert!(matches!(
        nothing.get_path_string(&empty, "").error,
        Some(JsonMapError::EmptyPath)
    ));
}

#[test]
fn coercion_error_carries_the_full_path() {
    let jm = decode(DATA, true).unwrap();
    let got = jm.get_path_i64(&["a", "b", "s"], 3);
    assert_eq!(got.value, 3);
    assert!(got.found);
    let err = got.error.unwrap();
    assert!(matches!(err, JsonMapError::Coerce { ref path, .. } if path == "a.b.s"));
    assert_eq!(
        err.coerce_error(),
        Some(&CoerceError::TypeMismatch {
            expected: "i64",
            actual: ValueKind::String
        })
    );
}

#[test]
fn exact_mode_parse_error_on_path() {
    let jm = decode(DATA, true).unwrap();
    let got = jm.get_path_i32(&["a", "b", "f"], -1);
    assert_eq!(got.value, -1);
    assert!(got.found);
    assert!(matches!(
        got.error.as_ref().and_then(JsonMapError::coerce_error),
        Some(CoerceError::NumericParse { target: "i32", .. })
    ));

    let jm = decode(DATA, false).unwrap();
    assert_eq!(jm.get_path_i32(&["a", "b", "f"], -1).value, 2);
}

// ============================================================================
// Sub-maps by path
// ============================================================================

#[test]
fn get_path_sub_map() {
    for jm in both_modes() {
        let got = jm.get_path_sub_map(&["a", "b"], JsonMap::new());
        assert!(got.found && got.error.is_none());
        assert_eq!(got.value.get_string("s", "").value, "str");

        let got = jm.get_path_sub_map(&["a", "b", "i"], JsonMap::new());
        assert!(got.found);
        assert!(got.value.is_empty());
        assert!(matches!(
            got.error,
            Some(JsonMapError::NotAMap { ref path, .. }) if path == "a.b.i"
        ));

        let got = jm.get_path_sub_map(&["x", "y"], JsonMap::new());
        assert!(!got.found);
        assert!(got.error.is_some());

        let got = jm.get_path_sub_map(&["a", "nope"], JsonMap::new());
        assert!(!got.found && got.error.is_none());
    }
}
