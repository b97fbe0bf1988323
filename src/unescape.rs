/*!
Shared escape-decoding for string literals.

This runs over the interior of a string (the span between, but not including, the bounding
quotes already located by the tokenizer) and produces the logical text. Decoding is deferred to
first access in lazy mode; eager mode runs it immediately as part of string construction.
*/

use crate::{document::Document, error::ParseError, std_ext::char::try_from_utf16_surrogate_pair};

pub(crate) fn decode(doc: &Document, start: usize, end: usize) -> Result<String, ParseError> {
    let bytes = doc.substring(start, end).as_bytes();
    let mut out = String::with_capacity(end - start);

    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];

        if c == b'\\' {
            let (decoded, consumed) = decode_escape(doc, bytes, start, i)?;
            match decoded {
                Decoded::Char(ch) => out.push(ch),
                Decoded::HighSurrogate(high) => {
                    let (low, low_consumed) = expect_low_surrogate(doc, bytes, start, i + consumed)?;
                    let combined = try_from_utf16_surrogate_pair(high, low).map_err(|_| {
                        ParseError::new(
                            "illegal unicode escape".to_owned(),
                            start + i,
                            doc.describe_at(start + i),
                        )
                    })?;
                    out.push(combined);
                    i += consumed + low_consumed;
                    continue;
                }
            }
            i += consumed;
        } else if c < 0x20 {
            return Err(ParseError::new(
                "unescaped control code".to_owned(),
                start + i,
                doc.describe_at(start + i),
            ));
        } else {
            // Copy whole UTF-8 characters verbatim; only ASCII bytes are structurally
            // meaningful here.
            let char_len = utf8_char_len(c);
            let slice = bytes.get(i..i + char_len).ok_or_else(|| {
                ParseError::new(
                    "truncated utf8 sequence in string".to_owned(),
                    start + i,
                    doc.describe_at(start + i),
                )
            })?;
            let s = std::str::from_utf8(slice).map_err(|_| {
                ParseError::new(
                    "invalid utf8 sequence in string".to_owned(),
                    start + i,
                    doc.describe_at(start + i),
                )
            })?;
            out.push_str(s);
            i += char_len;
        }
    }

    Ok(out)
}

enum Decoded {
    Char(char),
    HighSurrogate(u16),
}

fn decode_escape(
    doc: &Document,
    bytes: &[u8],
    start: usize,
    i: usize,
) -> Result<(Decoded, usize), ParseError> {
    let next = *bytes.get(i + 1).ok_or_else(|| {
        ParseError::new(
            "illegal escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        )
    })?;

    let decoded = match next {
        b'"' => Decoded::Char('"'),
        b'\\' => Decoded::Char('\\'),
        b'/' => Decoded::Char('/'),
        b'b' => Decoded::Char('\u{0008}'),
        b'f' => Decoded::Char('\u{000C}'),
        b'n' => Decoded::Char('\n'),
        b'r' => Decoded::Char('\r'),
        b't' => Decoded::Char('\t'),
        b'u' => {
            let code = parse_hex4(doc, bytes, start, i + 2)?;

            if (0xD800..=0xDBFF).contains(&code) {
                return Ok((Decoded::HighSurrogate(code), 6));
            }

            if (0xDC00..=0xDFFF).contains(&code) {
                return Err(ParseError::new(
                    "illegal unicode escape".to_owned(),
                    start + i,
                    doc.describe_at(start + i),
                ));
            }

            // Safe: any u16 outside the surrogate range is a valid scalar value on its own.
            Decoded::Char(char::from_u32(code as u32).ok_or_else(|| {
                ParseError::new(
                    "illegal unicode escape".to_owned(),
                    start + i,
                    doc.describe_at(start + i),
                )
            })?)
        }
        _ => {
            return Err(ParseError::new(
                "illegal escape".to_owned(),
                start + i,
                doc.describe_at(start + i),
            ))
        }
    };

    let consumed = if next == b'u' { 6 } else { 2 };
    Ok((decoded, consumed))
}

fn expect_low_surrogate(
    doc: &Document,
    bytes: &[u8],
    start: usize,
    i: usize,
) -> Result<(u16, usize), ParseError> {
    if bytes.get(i) != Some(&b'\\') || bytes.get(i + 1) != Some(&b'u') {
        return Err(ParseError::new(
            "illegal unicode escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        ));
    }

    let code = parse_hex4(doc, bytes, start, i + 2)?;

    if !(0xDC00..=0xDFFF).contains(&code) {
        return Err(ParseError::new(
            "illegal unicode escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        ));
    }

    Ok((code, 6))
}

fn parse_hex4(doc: &Document, bytes: &[u8], start: usize, i: usize) -> Result<u16, ParseError> {
    let digits = bytes.get(i..i + 4).ok_or_else(|| {
        ParseError::new(
            "illegal unicode escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        )
    })?;

    let s = std::str::from_utf8(digits).map_err(|_| {
        ParseError::new(
            "illegal unicode escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        )
    })?;

    u16::from_str_radix(s, 16).map_err(|_| {
        ParseError::new(
            "illegal unicode escape".to_owned(),
            start + i,
            doc.describe_at(start + i),
        )
    })
}

fn utf8_char_len(first_byte: u8) -> usize {
    if first_byte & 0x80 == 0 {
        1
    } else if first_byte & 0xE0 == 0xC0 {
        2
    } else if first_byte & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}
