/*!
# `wren-json`

A JSON value library with two parsing modes over the same value representation: eager, which
validates and materializes a whole document up front, and lazy, which defers inflating object and
array children until a caller actually asks for them.

Both modes share a single tokenizer that records the offsets of structurally significant
characters (`{ } [ ] " : ,`) in one pass over the source text, and a single inflation loop that
either runs to completion (eager) or stops as soon as it has answered the caller's question
(lazy `get`/`contains`).

```
let value = wren_json::parse(r#"{"name":"ripgrep","stars":41000}"#).unwrap();
let obj = value.as_object().unwrap();
let name = obj.get("name").unwrap().unwrap();
assert_eq!(&*name.as_str().unwrap().decoded().unwrap(), "ripgrep");
```

Enabling the `serde_json` feature adds conversions to and from [`serde_json::Value`].
*/

#![cfg_attr(checked, deny(warnings))]
#![allow(clippy::question_mark)] // generates slow code in parse hot paths

pub(crate) mod std_ext;

#[macro_use]
mod macros;

mod document;
mod error;
mod token;
mod unescape;

pub mod value;

mod from_native;
mod path;
mod render;

pub use crate::{
    error::{AccessError, ArrayGetError, ParseError},
    from_native::{FromNativeError, NativeValue},
    path::get_path,
    render::{to_compact_string, to_pretty_string},
    value::{
        array::Array, array::Iter as ArrayIter, number::JsonNumber, number::NumericValue,
        object::Object, string::JsonString, JsonValue, ValueKind,
    },
};

/// Parsing behavior shared by [`parse_with`] and [`parse_bytes_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Validate and materialize the entire value tree up front.
    ///
    /// When `false` (the default), objects and arrays defer inflating their children until a
    /// caller observes them through `keys`, `get`, `contains`, or iteration.
    pub eager: bool,
}

/// Parse a JSON document in lazy mode.
///
/// Equivalent to `parse_with(text, ParseOptions::default())`.
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    parse_with(text, ParseOptions::default())
}

/// Parse a JSON document with the given options.
pub fn parse_with(text: &str, options: ParseOptions) -> Result<JsonValue, ParseError> {
    value::parse_document(text.into(), options)
}

/// Parse a JSON document from raw bytes in lazy mode.
///
/// The bytes must be valid UTF-8; a non-UTF-8 buffer is reported as a [`ParseError`] at offset 0.
pub fn parse_bytes(bytes: &[u8]) -> Result<JsonValue, ParseError> {
    parse_bytes_with(bytes, ParseOptions::default())
}

/// Parse a JSON document from raw bytes with the given options.
pub fn parse_bytes_with(bytes: &[u8], options: ParseOptions) -> Result<JsonValue, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| ParseError::new("input is not valid utf8".to_owned(), 0, ""))?;

    parse_with(text, options)
}

#[cfg(test)]
mod tests;
