/*!
Building a [`JsonValue`] from ordinary Rust data.

Rather than constructing a value tree by hand, `from_native` renders the `NativeValue` to a
compact JSON string and eager-parses it through the same constructors every other value goes
through — so the core parser remains the single source of truth for what a valid `JsonValue`
looks like.
*/

use std::{collections::BTreeMap, error::Error, fmt};

use crate::{JsonValue, ParseOptions};

/// An in-memory value that can be turned into a [`JsonValue`].
///
/// This is a closed enum: there is no "unsupported type" failure mode, because every variant
/// that can be constructed is one this crate knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
    Array(Vec<NativeValue>),
    Object(BTreeMap<String, NativeValue>),
}

/// `NativeValue::from_native` failed because a floating-point value was not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct FromNativeError {
    message: String,
}

impl fmt::Display for FromNativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl Error for FromNativeError {}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl From<i64> for NativeValue {
    fn from(n: i64) -> Self {
        NativeValue::I64(n)
    }
}

impl From<f64> for NativeValue {
    fn from(n: f64) -> Self {
        NativeValue::F64(n)
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Str(s)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Str(s.to_owned())
    }
}

impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(items: Vec<T>) -> Self {
        NativeValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => NativeValue::Null,
        }
    }
}

impl JsonValue {
    /// Build a [`JsonValue`] from in-memory data.
    ///
    /// Fails only when a floating-point value somewhere in the tree is `NaN` or infinite — JSON
    /// has no way to represent either.
    pub fn from_native(value: NativeValue) -> Result<JsonValue, FromNativeError> {
        let mut rendered = String::new();
        render_native(&value, &mut rendered)?;

        crate::parse_with(&rendered, ParseOptions { eager: true }).map_err(|e| FromNativeError {
            message: format!("rendered native value failed to re-parse: {e}"),
        })
    }
}

fn render_native(value: &NativeValue, out: &mut String) -> Result<(), FromNativeError> {
    match value {
        NativeValue::Null => out.push_str("null"),
        NativeValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        NativeValue::I64(n) => out.push_str(&n.to_string()),
        NativeValue::F64(n) => {
            if !n.is_finite() {
                return Err(FromNativeError {
                    message: "floating-point value is not finite".to_owned(),
                });
            }
            out.push_str(&n.to_string());
        }
        NativeValue::Str(s) => render_native_str(s, out),
        NativeValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_native(item, out)?;
            }
            out.push(']');
        }
        NativeValue::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_native_str(key, out);
                out.push(':');
                render_native(item, out)?;
            }
            out.push('}');
        }
    }

    Ok(())
}

fn render_native_str(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(feature = "serde_json")]
impl TryFrom<serde_json::Value> for NativeValue {
    type Error = FromNativeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => NativeValue::Null,
            serde_json::Value::Bool(b) => NativeValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    NativeValue::I64(i)
                } else {
                    NativeValue::F64(n.as_f64().ok_or_else(|| FromNativeError {
                        message: "serde_json number has no f64 representation".to_owned(),
                    })?)
                }
            }
            serde_json::Value::String(s) => NativeValue::Str(s),
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(NativeValue::try_from(item)?);
                }
                NativeValue::Array(out)
            }
            serde_json::Value::Object(map) => {
                let mut out = BTreeMap::new();
                for (k, v) in map {
                    out.insert(k, NativeValue::try_from(v)?);
                }
                NativeValue::Object(out)
            }
        })
    }
}

#[cfg(feature = "serde_json")]
impl std::convert::TryFrom<serde_json::Value> for crate::JsonValue {
    type Error = FromNativeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        JsonValue::from_native(NativeValue::try_from(value)?)
    }
}
