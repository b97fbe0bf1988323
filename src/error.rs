/*!
Error types surfaced by the parser and by value accessors.
*/

use std::{error::Error, fmt};

/// A document failed to parse as JSON.
///
/// Carries the offset at which the problem was detected, along with a short snippet of the
/// surrounding text for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    message: String,
    offset: usize,
    context: String,
}

impl ParseError {
    pub(crate) fn new(message: String, offset: usize, context: impl Into<String>) -> Self {
        ParseError {
            message,
            offset,
            context: context.into(),
        }
    }

    /// The byte offset into the document at which the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A short window of text around [`ParseError::offset`].
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{} at offset {}", self.message, self.offset)
        } else {
            write!(
                f,
                "{} at offset {} (near `{}`)",
                self.message, self.offset, self.context
            )
        }
    }
}

impl Error for ParseError {}

/// A value could not be accessed in the requested representation.
///
/// Unlike [`ParseError`], encountering one of these does not invalidate the rest of the value
/// tree; the same value can still be accessed in other ways.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessError {
    message: String,
}

impl AccessError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        AccessError {
            message: message.into(),
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl Error for AccessError {}

/// Either of the two ways [`crate::Array::get`] can fail: the element at that position never
/// parsed (fatal, same as any other [`ParseError`]), or it parsed fine but the index is simply
/// out of range (non-fatal, same as any other [`AccessError`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayGetError {
    Parse(ParseError),
    Access(AccessError),
}

impl fmt::Display for ArrayGetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayGetError::Parse(e) => e.fmt(f),
            ArrayGetError::Access(e) => e.fmt(f),
        }
    }
}

impl Error for ArrayGetError {}

impl From<ParseError> for ArrayGetError {
    fn from(e: ParseError) -> Self {
        ArrayGetError::Parse(e)
    }
}

impl From<AccessError> for ArrayGetError {
    fn from(e: AccessError) -> Self {
        ArrayGetError::Access(e)
    }
}
