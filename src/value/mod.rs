/*!
The value tree: a tagged sum of the six JSON variants, plus the top-level dispatch that decides
which variant starts at a given offset.
*/

use std::rc::Rc;

use crate::{document::Document, error::ParseError, token, ParseOptions};

pub mod array;
pub mod boolean;
pub mod null;
pub mod number;
pub mod object;
pub mod string;

use array::Array;
use number::JsonNumber;
use object::Object;
use string::JsonString;

/// Which of the six JSON variants a [`JsonValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

/// Whether a container materializes its children immediately or on first access.
///
/// Every leaf value (string, number, boolean, null) validates its own span eagerly regardless of
/// mode; only object and array inflation is actually deferred by [`Mode::Lazy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Eager,
    Lazy,
}

impl Mode {
    pub(crate) fn from_options(options: ParseOptions) -> Mode {
        if options.eager {
            Mode::Eager
        } else {
            Mode::Lazy
        }
    }
}

enum Repr {
    Object(Object),
    Array(Array),
    String(JsonString),
    Number(JsonNumber),
    Boolean(bool),
    Null,
}

/// A parsed JSON value.
///
/// Cloning a `JsonValue` is cheap: it shares the underlying value (and, transitively, the whole
/// parsed document) by reference count rather than copying it.
#[derive(Clone)]
pub struct JsonValue(Rc<Repr>);

impl JsonValue {
    pub fn kind(&self) -> ValueKind {
        match &*self.0 {
            Repr::Object(_) => ValueKind::Object,
            Repr::Array(_) => ValueKind::Array,
            Repr::String(_) => ValueKind::String,
            Repr::Number(_) => ValueKind::Number,
            Repr::Boolean(_) => ValueKind::Boolean,
            Repr::Null => ValueKind::Null,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match &*self.0 {
            Repr::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match &*self.0 {
            Repr::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&JsonString> {
        match &*self.0 {
            Repr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&JsonNumber> {
        match &*self.0 {
            Repr::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &*self.0 {
            Repr::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(&*self.0, Repr::Null)
    }

    fn object(o: Object) -> JsonValue {
        JsonValue(Rc::new(Repr::Object(o)))
    }

    fn array(a: Array) -> JsonValue {
        JsonValue(Rc::new(Repr::Array(a)))
    }

    fn string(s: JsonString) -> JsonValue {
        JsonValue(Rc::new(Repr::String(s)))
    }

    fn number(n: JsonNumber) -> JsonValue {
        JsonValue(Rc::new(Repr::Number(n)))
    }

    fn boolean(b: bool) -> JsonValue {
        JsonValue(Rc::new(Repr::Boolean(b)))
    }

    fn null() -> JsonValue {
        JsonValue(Rc::new(Repr::Null))
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (&*self.0, &*other.0) {
            (Repr::Object(a), Repr::Object(b)) => a.structurally_eq(b),
            (Repr::Array(a), Repr::Array(b)) => a.structurally_eq(b),
            (Repr::String(a), Repr::String(b)) => a == b,
            (Repr::Number(a), Repr::Number(b)) => a == b,
            (Repr::Boolean(a), Repr::Boolean(b)) => a == b,
            (Repr::Null, Repr::Null) => true,
            _ => false,
        }
    }
}

impl std::fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::to_compact_string(self))
    }
}

pub(crate) fn parse_document(text: Box<str>, options: ParseOptions) -> Result<JsonValue, ParseError> {
    let doc = Document::parse(text);
    let mode = Mode::from_options(options);

    let (value, end_offset, _) = parse_value(&doc, 0, 0, mode)?;

    let end_offset = token::skip_whitespace(&doc, end_offset);
    if end_offset != doc.len() {
        return Err(ParseError::new(
            "garbage characters at end of document".to_owned(),
            end_offset,
            doc.describe_at(end_offset),
        ));
    }

    Ok(value)
}

/// Parse a value starting at `offset`, with `index_position` the token-index position of the
/// upcoming structural token (the value's own opening token for a container or string; the
/// *next* value's structural token for a number, boolean, or null, since those consume none).
///
/// Returns the parsed value, its end offset (exclusive), and the index position of the next
/// unconsumed structural token.
pub(crate) fn parse_value(
    doc: &Rc<Document>,
    offset: usize,
    index_position: usize,
    mode: Mode,
) -> Result<(JsonValue, usize, usize), ParseError> {
    let offset = token::skip_whitespace(doc, offset);

    if offset >= doc.len() {
        return Err(ParseError::new(
            "value not recognized".to_owned(),
            offset,
            doc.describe_at(offset),
        ));
    }

    let start_char = doc.char_at(offset);

    match start_char {
        b'{' => {
            test_assert!(token::is_walkable_start(start_char));
            let (object, end_offset, next) = Object::parse(doc, offset, index_position, mode)?;
            Ok((JsonValue::object(object), end_offset, next))
        }
        b'[' => {
            test_assert!(token::is_walkable_start(start_char));
            let (array, end_offset, next) = Array::parse(doc, offset, index_position, mode)?;
            Ok((JsonValue::array(array), end_offset, next))
        }
        b'"' => {
            test_assert!(token::is_walkable_start(start_char));
            let (s, end_offset, next) = JsonString::parse(doc, offset, index_position, mode)?;
            Ok((JsonValue::string(s), end_offset, next))
        }
        b't' | b'f' => {
            test_assert!(!token::is_walkable_start(start_char));
            let (b, end_offset) = boolean::parse(doc, offset)?;
            Ok((JsonValue::boolean(b), end_offset, index_position))
        }
        b'n' => {
            test_assert!(!token::is_walkable_start(start_char));
            let end_offset = null::parse(doc, offset)?;
            Ok((JsonValue::null(), end_offset, index_position))
        }
        b'-' | b'0'..=b'9' => {
            test_assert!(!token::is_walkable_start(start_char));
            let (n, end_offset) = JsonNumber::parse(doc, offset)?;
            Ok((JsonValue::number(n), end_offset, index_position))
        }
        _ => Err(ParseError::new(
            "invalid value".to_owned(),
            offset,
            doc.describe_at(offset),
        )),
    }
}
