mod some;

mod differential;
mod valid;

use crate::{value::ValueKind, ParseOptions};

fn parse_both(text: &str) -> (crate::JsonValue, crate::JsonValue) {
    let lazy = crate::parse(text).unwrap_or_else(|e| panic!("lazy parse failed: {e} for {text:?}"));
    let eager = crate::parse_with(text, ParseOptions { eager: true })
        .unwrap_or_else(|e| panic!("eager parse failed: {e} for {text:?}"));

    (lazy, eager)
}

#[test]
fn lazy_and_eager_agree_on_kind() {
    for text in [
        "null",
        "true",
        "false",
        "0",
        "-1.5e10",
        "\"hello\"",
        "[]",
        "{}",
        "[1,2,3]",
        r#"{"a":1,"b":[true,false,null]}"#,
    ] {
        let (lazy, eager) = parse_both(text);
        assert_eq!(lazy.kind(), eager.kind(), "mismatched kind for {text:?}");
        assert!(lazy == eager, "lazy and eager trees differ for {text:?}");
    }
}

#[test]
fn round_trip_through_compact_render() {
    let text = r#"{"a":1,"b":[true,false,null,"x"],"c":{"nested":3.5}}"#;
    let value = crate::parse(text).unwrap();
    let rendered = crate::to_compact_string(&value);
    let reparsed = crate::parse(&rendered).unwrap();

    assert!(value == reparsed);
}

#[test]
fn object_kind_reports_correctly() {
    let value = crate::parse(r#"{"x":1}"#).unwrap();
    assert_eq!(value.kind(), ValueKind::Object);
    assert!(value.as_array().is_none());
}

#[test]
fn compact_render_has_no_whitespace_outside_strings() {
    let value = crate::parse(r#"{"a": 1, "b": [true, false]}"#).unwrap();
    let rendered = crate::to_compact_string(&value);

    assert_eq!(rendered, r#"{"a":1,"b":[true,false]}"#);
}

#[test]
fn pretty_render_sorts_keys_and_indents_by_two_spaces() {
    let value = crate::parse(r#"{"b":1,"a":[true,null]}"#).unwrap();
    let rendered = crate::to_pretty_string(&value);

    assert_eq!(
        rendered,
        "{\n  \"a\": [\n    true,\n    null\n  ],\n  \"b\": 1\n}"
    );
}

#[test]
fn round_trip_through_pretty_render() {
    let text = r#"{"a":1,"b":[true,false,null,"x"],"c":{"nested":3.5}}"#;
    let value = crate::parse(text).unwrap();
    let rendered = crate::to_pretty_string(&value);
    let reparsed = crate::parse(&rendered).unwrap();

    assert!(value == reparsed);
}
