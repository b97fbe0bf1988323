/*!
Arrays: the positional container, sharing the object's inflation shape keyed by index instead of
key.
*/

use std::{cell::RefCell, rc::Rc};

use crate::{
    document::Document,
    error::{AccessError, ArrayGetError, ParseError},
    token::check_whitespace,
    value::{JsonValue, Mode},
};

/// A parsed JSON array.
pub struct Array {
    doc: Rc<Document>,
    mode: Mode,
    start_offset: usize,
    end_index: usize,
    state: RefCell<State>,
}

struct State {
    values: Vec<JsonValue>,
    cursor: usize,
    prev_end_offset: usize,
    done: bool,
}

enum Stop {
    Full,
    UntilIndex(usize),
}

impl Array {
    pub(crate) fn parse(
        doc: &Rc<Document>,
        offset: usize,
        index_position: usize,
        mode: Mode,
    ) -> Result<(Array, usize, usize), ParseError> {
        let tokens = doc.tokens();
        test_assert_eq!(doc.char_at(offset), b'[');

        let end_index = tokens.match_structure(doc, index_position, b'[', b']')?;
        let end_offset = tokens
            .offset_of(end_index)
            .expect("match_structure returned a valid index")
            + 1;

        let cursor = tokens
            .next_index(index_position)
            .ok_or_else(|| ParseError::new("unterminated array".to_owned(), doc.len(), ""))?;

        let array = Array {
            doc: Rc::clone(doc),
            mode,
            start_offset: offset,
            end_index,
            state: RefCell::new(State {
                values: Vec::new(),
                cursor,
                prev_end_offset: offset + 1,
                done: false,
            }),
        };

        if let Mode::Eager = mode {
            array.inflate(Stop::Full)?;
        }

        let next_index_position = tokens.next_index(end_index).unwrap_or_else(|| tokens.len());
        Ok((array, end_offset, next_index_position))
    }

    fn inflate(&self, stop: Stop) -> Result<(), ParseError> {
        let tokens = self.doc.tokens();
        let mut state = self.state.borrow_mut();

        if state.done {
            return Ok(());
        }

        loop {
            let cursor = state.cursor;
            let token_offset = tokens.offset_of(cursor).ok_or_else(|| {
                ParseError::new("unterminated array".to_owned(), self.doc.len(), "")
            })?;
            let c = tokens
                .char_at_index(&self.doc, cursor)
                .expect("offset_of succeeded above");

            if c == b']' {
                if !check_whitespace(&self.doc, state.prev_end_offset, token_offset) {
                    return Err(ParseError::new(
                        "unexpected characters before `]`".to_owned(),
                        state.prev_end_offset,
                        self.doc.describe_at(state.prev_end_offset),
                    ));
                }

                test_assert_eq!(cursor, self.end_index);
                state.done = true;
                break;
            }

            let value_start = state.prev_end_offset;
            let (value, value_end_offset, next_pos) =
                crate::value::parse_value(&self.doc, value_start, cursor, self.mode)?;

            let sep_offset = tokens
                .offset_of(next_pos)
                .ok_or_else(|| ParseError::new("expected `,` or `]`".to_owned(), self.doc.len(), ""))?;
            let sep = tokens
                .char_at_index(&self.doc, next_pos)
                .expect("offset_of succeeded above");

            if !check_whitespace(&self.doc, value_end_offset, sep_offset) {
                return Err(ParseError::new(
                    "unexpected characters after value".to_owned(),
                    value_end_offset,
                    self.doc.describe_at(value_end_offset),
                ));
            }

            let index = state.values.len();
            let found = matches!(stop, Stop::UntilIndex(i) if i == index);
            state.values.push(value);

            match sep {
                b',' => {
                    let next_cursor = tokens.next_index(next_pos).ok_or_else(|| {
                        ParseError::new("trailing comma not allowed".to_owned(), self.doc.len(), "")
                    })?;

                    if tokens.char_at_index(&self.doc, next_cursor) == Some(b']') {
                        return Err(ParseError::new(
                            "trailing comma not allowed".to_owned(),
                            sep_offset,
                            self.doc.describe_at(sep_offset),
                        ));
                    }

                    state.cursor = next_cursor;
                    state.prev_end_offset = sep_offset + 1;
                }
                b']' => {
                    test_assert_eq!(next_pos, self.end_index);
                    state.done = true;
                    state.cursor = next_pos;
                }
                _ => {
                    return Err(ParseError::new(
                        "expected `,` or `]`".to_owned(),
                        sep_offset,
                        self.doc.describe_at(sep_offset),
                    ))
                }
            }

            if found || state.done {
                break;
            }
        }

        Ok(())
    }

    /// Number of elements. Forces full inflation.
    pub fn size(&self) -> Result<usize, ParseError> {
        self.inflate(Stop::Full)?;
        Ok(self.state.borrow().values.len())
    }

    /// Alias for [`Array::size`].
    pub fn len(&self) -> Result<usize, ParseError> {
        self.size()
    }

    pub fn is_empty(&self) -> Result<bool, ParseError> {
        Ok(self.size()? == 0)
    }

    /// All elements, in order. Forces full inflation.
    pub fn values(&self) -> Result<Vec<JsonValue>, ParseError> {
        self.inflate(Stop::Full)?;
        Ok(self.state.borrow().values.clone())
    }

    /// Look up an element by index. In lazy mode, inflates only as far as needed to answer.
    ///
    /// A failure to parse the element itself is fatal ([`ArrayGetError::Parse`]); an index past
    /// the last element is a non-fatal out-of-range access ([`ArrayGetError::Access`]).
    pub fn get(&self, index: usize) -> Result<JsonValue, ArrayGetError> {
        if let Some(v) = self.state.borrow().values.get(index).cloned() {
            return Ok(v);
        }

        self.inflate(Stop::UntilIndex(index))?;

        self.state
            .borrow()
            .values
            .get(index)
            .cloned()
            .ok_or_else(|| AccessError::new(format!("index {index} out of range")).into())
    }

    pub(crate) fn structurally_eq(&self, other: &Array) -> bool {
        let (Ok(a), Ok(b)) = (self.values(), other.values()) else {
            return false;
        };

        a == b
    }

    /// The offset of the array's opening `[` in the source document.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }
}

/// Positional iteration over an array's elements. Forces full inflation up front; a failure to
/// inflate surfaces as a single `Err` item rather than being swallowed.
pub struct Iter {
    items: std::vec::IntoIter<Result<JsonValue, ParseError>>,
}

impl Iterator for Iter {
    type Item = Result<JsonValue, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl IntoIterator for &Array {
    type Item = Result<JsonValue, ParseError>;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        let items = match self.values() {
            Ok(values) => values.into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        };

        Iter { items: items.into_iter() }
    }
}
