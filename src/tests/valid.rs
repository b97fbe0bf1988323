//! End-to-end scenarios over well-formed documents: the ones worth naming individually rather
//! than leaving to the generative test in `some`.

use crate::ParseOptions;

fn parse_both(text: &str) -> (crate::JsonValue, crate::JsonValue) {
    let lazy = crate::parse(text).unwrap_or_else(|e| panic!("lazy parse failed: {e} for {text:?}"));
    let eager = crate::parse_with(text, ParseOptions { eager: true })
        .unwrap_or_else(|e| panic!("eager parse failed: {e} for {text:?}"));

    (lazy, eager)
}

#[test]
fn object_with_mixed_fields() {
    let (lazy, eager) = parse_both(r#"{"name":"John","age":30,"city":"New York"}"#);

    for value in [&lazy, &eager] {
        let obj = value.as_object().unwrap();
        assert_eq!(obj.size().unwrap(), 3);

        let name = obj.get("name").unwrap().unwrap();
        assert_eq!(&*name.as_str().unwrap().decoded().unwrap(), "John");

        let age = obj.get("age").unwrap().unwrap();
        assert_eq!(age.as_number().unwrap().as_i64().unwrap(), 30);

        let city = obj.get("city").unwrap().unwrap();
        assert_eq!(&*city.as_str().unwrap().decoded().unwrap(), "New York");

        assert!(!obj.contains("zip").unwrap());
    }
}

#[test]
fn array_of_mixed_leaves() {
    let (lazy, eager) = parse_both(r#"[null, true, false, 1, "x"]"#);

    for value in [&lazy, &eager] {
        let arr = value.as_array().unwrap();
        assert_eq!(arr.size().unwrap(), 5);

        assert!(arr.get(0).unwrap().is_null());
        assert_eq!(arr.get(1).unwrap().as_bool(), Some(true));
        assert_eq!(arr.get(2).unwrap().as_bool(), Some(false));
        assert_eq!(arr.get(3).unwrap().as_number().unwrap().as_i64().unwrap(), 1);
        assert_eq!(&*arr.get(4).unwrap().as_str().unwrap().decoded().unwrap(), "x");
    }
}

#[test]
fn nested_containers_reachable_through_chained_gets() {
    let (lazy, eager) = parse_both(r#"{"a":{"b":[1,{"c":"d"}]}}"#);

    for value in [&lazy, &eager] {
        let a = value.as_object().unwrap().get("a").unwrap().unwrap();
        let b = a.as_object().unwrap().get("b").unwrap().unwrap();
        let b_arr = b.as_array().unwrap();
        assert_eq!(b_arr.size().unwrap(), 2);

        let second = b_arr.get(1).unwrap();
        let c = second.as_object().unwrap().get("c").unwrap().unwrap();
        assert_eq!(&*c.as_str().unwrap().decoded().unwrap(), "d");
    }

    assert!(lazy == eager);
}

#[test]
fn partial_lazy_inflation_still_compares_equal_to_eager() {
    let lazy = crate::parse(r#"{"a":{"b":[1,{"c":"d"}]},"sibling":{"untouched":1}}"#).unwrap();
    let eager = crate::parse_with(
        r#"{"a":{"b":[1,{"c":"d"}]},"sibling":{"untouched":1}}"#,
        ParseOptions { eager: true },
    )
    .unwrap();

    // Walk only the deepest chain; `sibling` is never inflated on the lazy side.
    let a = lazy.as_object().unwrap().get("a").unwrap().unwrap();
    let b = a.as_object().unwrap().get("b").unwrap().unwrap();
    let _ = b.as_array().unwrap().get(1).unwrap();

    assert!(lazy == eager);
}

#[test]
fn empty_object_and_array() {
    for text in ["{}", "[ ]", "{ }", "[]"] {
        let value = crate::parse(text).unwrap();
        match value.kind() {
            crate::ValueKind::Object => assert_eq!(value.as_object().unwrap().size().unwrap(), 0),
            crate::ValueKind::Array => assert_eq!(value.as_array().unwrap().size().unwrap(), 0),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}

#[test]
fn top_level_scalars() {
    assert!(crate::parse("true").unwrap().as_bool() == Some(true));
    assert!(crate::parse("false").unwrap().as_bool() == Some(false));
    assert!(crate::parse("null").unwrap().is_null());
    assert_eq!(crate::parse("42").unwrap().as_number().unwrap().as_i64().unwrap(), 42);
    assert_eq!(
        &*crate::parse(r#""hi""#).unwrap().as_str().unwrap().decoded().unwrap(),
        "hi"
    );
}

#[test]
fn trailing_whitespace_after_top_level_value_is_accepted() {
    assert!(crate::parse("  {}  \n\t").is_ok());
    assert!(crate::parse("42\n").is_ok());
}

#[test]
fn object_contains_reflects_subsequent_get() {
    let value = crate::parse(r#"{"a":1,"b":2}"#).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains("a").unwrap());
    assert!(obj.get("a").unwrap().is_some());

    assert!(!obj.contains("missing").unwrap());
    assert!(obj.get("missing").unwrap().is_none());
}

#[test]
fn get_or_default_falls_back_when_key_absent() {
    let value = crate::parse(r#"{"a":1}"#).unwrap();
    let obj = value.as_object().unwrap();

    let fallback = crate::parse("99").unwrap();
    let present = obj.get_or_default("a", fallback.clone()).unwrap();
    assert_eq!(present.as_number().unwrap().as_i64().unwrap(), 1);

    let absent = obj.get_or_default("missing", fallback).unwrap();
    assert_eq!(absent.as_number().unwrap().as_i64().unwrap(), 99);
}

#[test]
fn len_aliases_size_on_object_and_array() {
    let value = crate::parse(r#"{"a":1,"b":2}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len().unwrap(), obj.size().unwrap());

    let value = crate::parse("[1,2,3]").unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len().unwrap(), arr.size().unwrap());
}

#[test]
fn array_into_iterator_yields_elements_in_order() {
    let value = crate::parse("[1,2,3]").unwrap();
    let arr = value.as_array().unwrap();

    let collected: Vec<i64> = (&arr)
        .into_iter()
        .map(|v| v.unwrap().as_number().unwrap().as_i64().unwrap())
        .collect();

    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn well_formed_separators_are_accepted_without_trailing_comma() {
    for text in ["[1,2,3]", r#"{"a":1,"b":2}"#] {
        let value = crate::parse_with(text, ParseOptions { eager: true }).unwrap();
        match value.kind() {
            crate::ValueKind::Object => assert_eq!(value.as_object().unwrap().size().unwrap(), 2),
            crate::ValueKind::Array => assert_eq!(value.as_array().unwrap().size().unwrap(), 3),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
