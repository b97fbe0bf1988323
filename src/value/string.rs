/*!
Strings: escape decoding is deferred to first access in lazy mode and cached afterwards; eager
mode forces decoding immediately so construction-time failures surface right away.
*/

use std::{cell::RefCell, rc::Rc};

use crate::{document::Document, error::ParseError, value::Mode};

/// A parsed JSON string.
///
/// The raw (still-escaped) span is always available; the decoded text is computed once, on
/// first access in lazy mode or immediately in eager mode, and cached afterwards (including a
/// cached decode failure, so it is never re-attempted).
pub struct JsonString {
    doc: Rc<Document>,
    start: usize,
    end: usize,
    decoded: RefCell<Option<Result<Rc<str>, ParseError>>>,
}

impl JsonString {
    pub(crate) fn parse(
        doc: &Rc<Document>,
        offset: usize,
        index_position: usize,
        mode: Mode,
    ) -> Result<(JsonString, usize, usize), ParseError> {
        test_assert_eq!(doc.char_at(offset), b'"');

        let tokens = doc.tokens();
        let close_index = tokens.next_index(index_position).ok_or_else(|| {
            ParseError::new("unterminated string".to_owned(), doc.len(), doc.describe_at(offset))
        })?;

        if tokens.char_at_index(doc, close_index) != Some(b'"') {
            return Err(ParseError::new(
                "unterminated string".to_owned(),
                offset,
                doc.describe_at(offset),
            ));
        }

        let start = offset + 1;
        let end = tokens
            .offset_of(close_index)
            .expect("char_at_index succeeded above");

        let string = JsonString {
            doc: Rc::clone(doc),
            start,
            end,
            decoded: RefCell::new(None),
        };

        if let Mode::Eager = mode {
            string.decoded()?;
        }

        let next_index_position = tokens.next_index(close_index).unwrap_or_else(|| tokens.len());
        Ok((string, end + 1, next_index_position))
    }

    /// The raw, still-escaped text between the bounding quotes.
    pub fn raw(&self) -> &str {
        self.doc.substring(self.start, self.end)
    }

    /// The logical text, with escapes decoded. Decoded once and cached afterwards.
    pub fn decoded(&self) -> Result<Rc<str>, ParseError> {
        if let Some(cached) = self.decoded.borrow().as_ref() {
            return cached.clone();
        }

        let result = crate::unescape::decode(&self.doc, self.start, self.end).map(Rc::from);
        *self.decoded.borrow_mut() = Some(result.clone());
        result
    }
}

impl PartialEq for JsonString {
    fn eq(&self, other: &Self) -> bool {
        match (self.decoded(), other.decoded()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
