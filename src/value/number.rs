/*!
Numbers: a strict RFC 8259 scanner/classifier with deferred, independently-cached coercions.
*/

use std::{cell::RefCell, rc::Rc};

use crate::{document::Document, error::{AccessError, ParseError}};

/// A parsed JSON number.
///
/// The textual form is retained verbatim (borrowed from the document, not copied). Coercion to a
/// 64-bit integer, 128-bit integer, or double is computed lazily and cached independently per
/// representation.
pub struct JsonNumber {
    doc: Rc<Document>,
    start: usize,
    end: usize,
    fp: bool,
    long: RefCell<Option<Result<i64, AccessError>>>,
    big: RefCell<Option<Result<i128, AccessError>>>,
    double: RefCell<Option<Result<f64, AccessError>>>,
}

/// The result of [`JsonNumber::to_number`]: the narrowest representation the value fit in,
/// without the caller having to pick a coercion ahead of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    I64(i64),
    I128(i128),
    F64(f64),
}

impl JsonNumber {
    pub(crate) fn parse(doc: &Rc<Document>, offset: usize) -> Result<(JsonNumber, usize), ParseError> {
        let start = offset;
        let mut i = offset;
        let len = doc.len();
        let mut fp = false;

        let fail = |message: &str, at: usize| {
            ParseError::new(message.to_owned(), at, doc.describe_at(at))
        };

        if i < len && doc.char_at(i) == b'-' {
            i += 1;
        }

        let int_start = i;
        if i >= len || !doc.char_at(i).is_ascii_digit() {
            return Err(fail("invalid number", start));
        }

        if doc.char_at(i) == b'0' {
            i += 1;
            if i < len && doc.char_at(i).is_ascii_digit() {
                return Err(fail("zero not allowed here", int_start));
            }
        } else {
            while i < len && doc.char_at(i).is_ascii_digit() {
                i += 1;
            }
        }

        if i < len && doc.char_at(i) == b'.' {
            fp = true;
            i += 1;
            let frac_start = i;
            while i < len && doc.char_at(i).is_ascii_digit() {
                i += 1;
            }
            if i == frac_start {
                return Err(fail("dangling decimal point", frac_start));
            }
        }

        if i < len && (doc.char_at(i) == b'e' || doc.char_at(i) == b'E') {
            fp = true;
            i += 1;
            if i < len && (doc.char_at(i) == b'+' || doc.char_at(i) == b'-') {
                i += 1;
            }
            let exp_start = i;
            while i < len && doc.char_at(i).is_ascii_digit() {
                i += 1;
            }
            if i == exp_start {
                return Err(fail("dangling exponent", exp_start));
            }
        }

        let end = i;

        if fp {
            let text = doc.substring(start, end);
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {}
                _ => return Err(fail("number is too large to represent", start)),
            }
        }

        let number = JsonNumber {
            doc: Rc::clone(doc),
            start,
            end,
            fp,
            long: RefCell::new(None),
            big: RefCell::new(None),
            double: RefCell::new(None),
        };

        Ok((number, end))
    }

    /// The original textual form, exactly as written in the source.
    pub fn text(&self) -> &str {
        self.doc.substring(self.start, self.end)
    }

    /// Whether the textual form contains a `.` or an exponent.
    pub fn is_floating_point(&self) -> bool {
        self.fp
    }

    pub fn as_i64(&self) -> Result<i64, AccessError> {
        if let Some(cached) = self.long.borrow().as_ref() {
            return cached.clone();
        }

        let result = if self.fp {
            Err(AccessError::new(format!(
                "`{}` has a fractional or exponent part and cannot be an integer",
                self.text()
            )))
        } else {
            self.text()
                .parse()
                .map_err(|_| AccessError::new(format!("`{}` does not fit in an i64", self.text())))
        };

        *self.long.borrow_mut() = Some(result.clone());
        result
    }

    pub fn as_i128(&self) -> Result<i128, AccessError> {
        if let Some(cached) = self.big.borrow().as_ref() {
            return cached.clone();
        }

        let result = if self.fp {
            Err(AccessError::new(format!(
                "`{}` has a fractional or exponent part and cannot be an integer",
                self.text()
            )))
        } else {
            self.text()
                .parse()
                .map_err(|_| AccessError::new(format!("`{}` does not fit in an i128", self.text())))
        };

        *self.big.borrow_mut() = Some(result.clone());
        result
    }

    pub fn as_f64(&self) -> Result<f64, AccessError> {
        if let Some(cached) = self.double.borrow().as_ref() {
            return cached.clone();
        }

        let result = self
            .text()
            .parse()
            .map_err(|_| AccessError::new(format!("`{}` does not fit in an f64", self.text())));

        *self.double.borrow_mut() = Some(result.clone());
        result
    }

    /// Coerce to the narrowest representation that fits: `i64`, falling back to `i128`, falling
    /// back to `f64`.
    pub fn to_number(&self) -> NumericValue {
        if !self.fp {
            if let Ok(v) = self.as_i64() {
                return NumericValue::I64(v);
            }
            if let Ok(v) = self.as_i128() {
                return NumericValue::I128(v);
            }
        }

        NumericValue::F64(self.as_f64().unwrap_or(f64::NAN))
    }
}

impl PartialEq for JsonNumber {
    fn eq(&self, other: &Self) -> bool {
        self.text().eq_ignore_ascii_case(other.text())
    }
}
