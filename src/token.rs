/*!
The structural tokenizer: a single pass over the source text that records the offsets of
structurally significant characters, skipping everything else.
*/

use crate::{document::Document, error::ParseError};

const WHITESPACE: [u8; 4] = [b' ', b'\t', b'\n', b'\r'];

/// An ordered, strictly increasing list of byte offsets, one per occurrence of a structural
/// character (`{ } [ ] " : ,`) outside of string literals, plus the opening and closing quotes
/// of string literals.
///
/// Numbers, booleans, and `null` consume no entries: their spans are located by scanning
/// forward from a known start offset instead.
pub(crate) struct TokenIndex {
    offsets: Vec<u32>,
}

impl TokenIndex {
    pub(crate) fn build(text: &str) -> TokenIndex {
        let bytes = text.as_bytes();
        let mut offsets = Vec::new();
        let mut in_string = false;

        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];

            match c {
                b'"' => {
                    if !in_string {
                        offsets.push(i as u32);
                        in_string = true;
                    } else {
                        let mut backslashes = 0;
                        let mut j = i;
                        while j > 0 && bytes[j - 1] == b'\\' {
                            backslashes += 1;
                            j -= 1;
                        }

                        if backslashes % 2 == 0 {
                            offsets.push(i as u32);
                            in_string = false;
                        }
                    }
                }
                b'{' | b'}' | b'[' | b']' | b':' | b',' if !in_string => {
                    offsets.push(i as u32);
                }
                _ => {}
            }

            i += 1;
        }

        TokenIndex { offsets }
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }

    pub(crate) fn offset_of(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).map(|&o| o as usize)
    }

    pub(crate) fn char_at_index(&self, doc: &Document, index: usize) -> Option<u8> {
        self.offset_of(index).map(|offset| doc.char_at(offset))
    }

    pub(crate) fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        if next < self.len() {
            Some(next)
        } else {
            None
        }
    }

    /// Find the index position of the token matching the opener at `start`, by walking the
    /// token stream and tracking nesting depth on `open`/`close` tokens only.
    ///
    /// `start` must be the index position of an `open` token.
    pub(crate) fn match_structure(
        &self,
        doc: &Document,
        start: usize,
        open: u8,
        close: u8,
    ) -> Result<usize, ParseError> {
        test_assert_eq!(self.char_at_index(doc, start), Some(open));

        let mut depth: u32 = 0;
        let mut i = start;

        loop {
            let c = self.char_at_index(doc, i).ok_or_else(|| {
                ParseError::new(
                    "braces or brackets do not match".to_owned(),
                    doc.len(),
                    "",
                )
            })?;

            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }

            i = self.next_index(i).ok_or_else(|| {
                ParseError::new(
                    "braces or brackets do not match".to_owned(),
                    doc.len(),
                    "",
                )
            })?;
        }
    }
}

/// Whether a value starting with `c` has its own entry in the token index.
///
/// Containers and strings are recorded by the tokenizer (their opening `{`/`[`/`"` is a
/// structural character); numbers, booleans, and `null` are not, since the tokenizer only records
/// `{ } [ ] " : ,` and none of those leaf kinds begin with one.
pub(crate) fn is_walkable_start(c: u8) -> bool {
    matches!(c, b'"' | b'{' | b'[')
}

pub(crate) fn skip_whitespace(doc: &Document, mut offset: usize) -> usize {
    while offset < doc.len() && WHITESPACE.contains(&doc.char_at(offset)) {
        offset += 1;
    }

    offset
}

pub(crate) fn check_whitespace(doc: &Document, start: usize, end: usize) -> bool {
    (start..end).all(|i| WHITESPACE.contains(&doc.char_at(i)))
}

pub(crate) fn is_whitespace(c: u8) -> bool {
    WHITESPACE.contains(&c)
}
