//! Differential testing against `serde_json` and the `json` crate: every generated document must
//! parse with all three, and this crate's value tree must agree structurally with `serde_json`'s.

use crate::{value::ValueKind, JsonValue};

use super::some;

fn values_match(ours: &JsonValue, theirs: &serde_json::Value) -> bool {
    match (ours.kind(), theirs) {
        (ValueKind::Null, serde_json::Value::Null) => true,
        (ValueKind::Boolean, serde_json::Value::Bool(b)) => ours.as_bool() == Some(*b),
        (ValueKind::Number, serde_json::Value::Number(n)) => {
            let num = ours.as_number().expect("kind matched Number");
            let ours_f64 = num.as_f64().expect("generated numbers always fit in f64");
            let theirs_f64 = n.as_f64().expect("serde_json number always fits in f64 here");
            (ours_f64 - theirs_f64).abs() <= 1e-9 * theirs_f64.abs().max(1.0)
        }
        (ValueKind::String, serde_json::Value::String(s)) => {
            &*ours.as_str().expect("kind matched String").decoded().unwrap() == s
        }
        (ValueKind::Array, serde_json::Value::Array(items)) => {
            let ours_items = ours.as_array().expect("kind matched Array").values().unwrap();
            ours_items.len() == items.len()
                && ours_items.iter().zip(items).all(|(a, b)| values_match(a, b))
        }
        (ValueKind::Object, serde_json::Value::Object(map)) => {
            let obj = ours.as_object().expect("kind matched Object");
            let keys = obj.keys().unwrap();
            keys.len() == map.len()
                && keys.iter().all(|k| {
                    map.get(&**k)
                        .map_or(false, |v| values_match(&obj.get(k).unwrap().unwrap(), v))
                })
        }
        _ => false,
    }
}

#[test]
fn generated_documents_agree_with_serde_json_and_json() {
    for _ in 0..300 {
        let text = some::json_value();

        let ours = crate::parse(&text).unwrap_or_else(|e| panic!("wren-json failed on {text:?}: {e}"));
        let theirs: serde_json::Value =
            serde_json::from_str(&text).unwrap_or_else(|e| panic!("serde_json failed on {text:?}: {e}"));
        json::parse(&text).unwrap_or_else(|e| panic!("json crate failed on {text:?}: {e}"));

        assert!(values_match(&ours, &theirs), "value mismatch for {text:?}");

        let eager = crate::parse_with(&text, crate::ParseOptions { eager: true })
            .unwrap_or_else(|e| panic!("eager parse failed on {text:?}: {e}"));
        assert!(ours == eager, "lazy and eager trees disagree for {text:?}");
    }
}
