/*!
Objects: the keyed container. Construction always resolves brace balance up front via
`match_structure`; only child materialization is actually deferred in lazy mode.
*/

use std::{cell::RefCell, rc::Rc};

use crate::{
    document::Document,
    error::ParseError,
    token::check_whitespace,
    value::{Mode, JsonValue},
};

/// A parsed JSON object.
///
/// In lazy mode, entries are materialized on demand: `get` and `contains` stop inflating as soon
/// as they've answered the question asked; `keys` and `size` force full inflation.
pub struct Object {
    doc: Rc<Document>,
    mode: Mode,
    start_offset: usize,
    end_index: usize,
    state: RefCell<State>,
}

struct State {
    entries: Vec<(Rc<str>, JsonValue)>,
    cursor: usize,
    prev_end_offset: usize,
    done: bool,
    poisoned: Option<ParseError>,
}

enum Stop<'a> {
    Full,
    UntilKey(&'a str),
}

impl Object {
    pub(crate) fn parse(
        doc: &Rc<Document>,
        offset: usize,
        index_position: usize,
        mode: Mode,
    ) -> Result<(Object, usize, usize), ParseError> {
        let tokens = doc.tokens();
        test_assert_eq!(doc.char_at(offset), b'{');

        let end_index = tokens.match_structure(doc, index_position, b'{', b'}')?;
        let end_offset = tokens
            .offset_of(end_index)
            .expect("match_structure returned a valid index")
            + 1;

        let cursor = tokens
            .next_index(index_position)
            .ok_or_else(|| ParseError::new("unterminated object".to_owned(), doc.len(), ""))?;

        let object = Object {
            doc: Rc::clone(doc),
            mode,
            start_offset: offset,
            end_index,
            state: RefCell::new(State {
                entries: Vec::new(),
                cursor,
                prev_end_offset: offset + 1,
                done: false,
                poisoned: None,
            }),
        };

        if let Mode::Eager = mode {
            object.inflate(Stop::Full)?;
        }

        let next_index_position = tokens.next_index(end_index).unwrap_or_else(|| tokens.len());
        Ok((object, end_offset, next_index_position))
    }

    /// Drives inflation, recording a failure in `State::poisoned` so that a later call never
    /// reads entries left behind by a parse that failed partway through (spec: "the partially
    /// built Object is never observable" once a duplicate key, or any other error, is detected).
    fn inflate(&self, stop: Stop<'_>) -> Result<(), ParseError> {
        let mut state = self.state.borrow_mut();

        if let Some(err) = &state.poisoned {
            return Err(err.clone());
        }

        if state.done {
            return Ok(());
        }

        let result = self.inflate_loop(&mut state, stop);
        if let Err(err) = &result {
            state.poisoned = Some(err.clone());
        }
        result
    }

    fn inflate_loop(&self, state: &mut State, stop: Stop<'_>) -> Result<(), ParseError> {
        let tokens = self.doc.tokens();

        loop {
            let cursor = state.cursor;
            let token_offset = tokens.offset_of(cursor).ok_or_else(|| {
                ParseError::new("unterminated object".to_owned(), self.doc.len(), "")
            })?;
            let c = tokens
                .char_at_index(&self.doc, cursor)
                .expect("offset_of succeeded above");

            if c == b'}' {
                if !check_whitespace(&self.doc, state.prev_end_offset, token_offset) {
                    return Err(ParseError::new(
                        "unexpected characters before `}`".to_owned(),
                        state.prev_end_offset,
                        self.doc.describe_at(state.prev_end_offset),
                    ));
                }

                test_assert_eq!(cursor, self.end_index);
                state.done = true;
                break;
            }

            if c != b'"' {
                return Err(ParseError::new(
                    "expected a string key or `}`".to_owned(),
                    token_offset,
                    self.doc.describe_at(token_offset),
                ));
            }

            if !check_whitespace(&self.doc, state.prev_end_offset, token_offset) {
                return Err(ParseError::new(
                    "unexpected characters before object key".to_owned(),
                    state.prev_end_offset,
                    self.doc.describe_at(state.prev_end_offset),
                ));
            }

            let key_start = token_offset + 1;
            let close_key_index = tokens
                .next_index(cursor)
                .ok_or_else(|| ParseError::new("unterminated string".to_owned(), self.doc.len(), ""))?;
            let key_end = tokens.offset_of(close_key_index).ok_or_else(|| {
                ParseError::new("unterminated string".to_owned(), self.doc.len(), "")
            })?;

            let key: Rc<str> = crate::unescape::decode(&self.doc, key_start, key_end)?.into();

            if state.entries.iter().any(|(k, _)| *k == key) {
                return Err(ParseError::new(
                    "duplicate keys not allowed".to_owned(),
                    token_offset,
                    self.doc.describe_at(token_offset),
                ));
            }

            let colon_index = tokens.next_index(close_key_index).ok_or_else(|| {
                ParseError::new("expected `:` after object key".to_owned(), self.doc.len(), "")
            })?;
            let colon_offset = tokens.offset_of(colon_index).ok_or_else(|| {
                ParseError::new("expected `:` after object key".to_owned(), self.doc.len(), "")
            })?;

            if tokens.char_at_index(&self.doc, colon_index) != Some(b':') {
                return Err(ParseError::new(
                    "expected `:` after object key".to_owned(),
                    colon_offset,
                    self.doc.describe_at(colon_offset),
                ));
            }

            if !check_whitespace(&self.doc, key_end + 1, colon_offset) {
                return Err(ParseError::new(
                    "unexpected characters after object key".to_owned(),
                    key_end + 1,
                    self.doc.describe_at(key_end + 1),
                ));
            }

            let value_start = colon_offset + 1;
            let value_index_position = tokens.next_index(colon_index).unwrap_or_else(|| tokens.len());

            let (value, value_end_offset, next_pos) =
                crate::value::parse_value(&self.doc, value_start, value_index_position, self.mode)?;

            let sep_offset = tokens
                .offset_of(next_pos)
                .ok_or_else(|| ParseError::new("expected `,` or `}`".to_owned(), self.doc.len(), ""))?;
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

            let found = matches!(stop, Stop::UntilKey(target) if target == &*key);
            state.entries.push((key, value));

            match sep {
                b',' => {
                    let next_cursor = tokens.next_index(next_pos).ok_or_else(|| {
                        ParseError::new("trailing comma not allowed".to_owned(), self.doc.len(), "")
                    })?;

                    if tokens.char_at_index(&self.doc, next_cursor) == Some(b'}') {
                        return Err(ParseError::new(
                            "trailing comma not allowed".to_owned(),
                            sep_offset,
                            self.doc.describe_at(sep_offset),
                        ));
                    }

                    state.cursor = next_cursor;
                    state.prev_end_offset = sep_offset + 1;
                }
                b'}' => {
                    test_assert_eq!(next_pos, self.end_index);
                    state.done = true;
                    state.cursor = next_pos;
                }
                _ => {
                    return Err(ParseError::new(
                        "expected `,` or `}`".to_owned(),
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

    /// Number of entries. Forces full inflation.
    pub fn size(&self) -> Result<usize, ParseError> {
        self.inflate(Stop::Full)?;
        Ok(self.state.borrow().entries.len())
    }

    /// Alias for [`Object::size`].
    pub fn len(&self) -> Result<usize, ParseError> {
        self.size()
    }

    pub fn is_empty(&self) -> Result<bool, ParseError> {
        Ok(self.size()? == 0)
    }

    /// All keys, in the order they appeared in the source. Forces full inflation.
    pub fn keys(&self) -> Result<Vec<Rc<str>>, ParseError> {
        self.inflate(Stop::Full)?;
        Ok(self.state.borrow().entries.iter().map(|(k, _)| Rc::clone(k)).collect())
    }

    /// Look up a value by key. In lazy mode, inflates only as far as needed to answer.
    pub fn get(&self, key: &str) -> Result<Option<JsonValue>, ParseError> {
        if let Some(err) = &self.state.borrow().poisoned {
            return Err(err.clone());
        }

        if let Some(found) = find_entry(&self.state.borrow().entries, key) {
            return Ok(Some(found));
        }

        self.inflate(Stop::UntilKey(key))?;
        Ok(find_entry(&self.state.borrow().entries, key))
    }

    pub fn contains(&self, key: &str) -> Result<bool, ParseError> {
        Ok(self.get(key)?.is_some())
    }

    pub fn get_or_default(&self, key: &str, default: JsonValue) -> Result<JsonValue, ParseError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    pub(crate) fn structurally_eq(&self, other: &Object) -> bool {
        let (Ok(a), Ok(b)) = (self.keys_and_values(), other.keys_and_values()) else {
            return false;
        };

        if a.len() != b.len() {
            return false;
        }

        a.iter().all(|(k, v)| {
            b.iter()
                .find(|(bk, _)| bk == k)
                .map(|(_, bv)| bv == v)
                .unwrap_or(false)
        })
    }

    fn keys_and_values(&self) -> Result<Vec<(Rc<str>, JsonValue)>, ParseError> {
        self.inflate(Stop::Full)?;
        Ok(self.state.borrow().entries.clone())
    }

    /// The offset of the object's opening `{` in the source document.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }
}

fn find_entry(entries: &[(Rc<str>, JsonValue)], key: &str) -> Option<JsonValue> {
    entries.iter().find(|(k, _)| &**k == key).map(|(_, v)| v.clone())
}
