/*!
Null: a single canonical value with no further state.
*/

use std::rc::Rc;

use crate::{document::Document, error::ParseError};

pub(crate) fn parse(doc: &Rc<Document>, offset: usize) -> Result<usize, ParseError> {
    if offset + 4 <= doc.len()
        && doc.char_at(offset) == b'n'
        && doc.char_at(offset + 1) == b'u'
        && doc.char_at(offset + 2) == b'l'
        && doc.char_at(offset + 3) == b'l'
    {
        return Ok(offset + 4);
    }

    Err(ParseError::new(
        "invalid value".to_owned(),
        offset,
        doc.describe_at(offset),
    ))
}
