/*!
The immutable source buffer shared by every value parsed from it.
*/

use std::rc::Rc;

use crate::token::TokenIndex;

/// The source text of a parse, together with the token index built over it.
///
/// A `Document` is shared (via `Rc`) by every [`crate::JsonValue`] descended from the same parse,
/// so a parsed value tree is self-contained and outlives the caller's original buffer.
pub(crate) struct Document {
    text: Box<str>,
    tokens: TokenIndex,
}

impl Document {
    pub(crate) fn parse(text: impl Into<Box<str>>) -> Rc<Document> {
        let text = text.into();
        let tokens = TokenIndex::build(&text);

        Rc::new(Document { text, tokens })
    }

    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn char_at(&self, offset: usize) -> u8 {
        get_unchecked!(self.text.as_bytes(), offset).to_owned()
    }

    pub(crate) fn substring(&self, start: usize, end: usize) -> &str {
        &self.text[start..end]
    }

    pub(crate) fn tokens(&self) -> &TokenIndex {
        &self.tokens
    }

    /// A short snippet of text starting at `offset`, for error messages.
    pub(crate) fn describe_at(&self, offset: usize) -> &str {
        if offset >= self.len() {
            return "<end of input>";
        }

        let mut end = (offset + 8).min(self.len());
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }

        &self.text[offset..end]
    }
}
