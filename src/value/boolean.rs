/*!
Booleans: the simplest leaf kind. No document back-reference is needed once parsed, since a
`bool` carries no further state to look up later.
*/

use std::rc::Rc;

use crate::{document::Document, error::ParseError};

pub(crate) fn parse(doc: &Rc<Document>, offset: usize) -> Result<(bool, usize), ParseError> {
    if matches_literal(doc, offset, b"true") {
        return Ok((true, offset + 4));
    }

    if matches_literal(doc, offset, b"false") {
        return Ok((false, offset + 5));
    }

    Err(ParseError::new(
        "invalid value".to_owned(),
        offset,
        doc.describe_at(offset),
    ))
}

fn matches_literal(doc: &Document, offset: usize, literal: &[u8]) -> bool {
    if offset + literal.len() > doc.len() {
        return false;
    }

    literal
        .iter()
        .enumerate()
        .all(|(i, &b)| doc.char_at(offset + i) == b)
}
