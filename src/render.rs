/*!
Rendering a value tree back to text.

Since this crate's objects do not preserve source insertion order past full inflation (lazy
inflation order is simply "as discovered"), both rendering modes sort keys alphabetically so that
output is deterministic and testable.

A value only reaches here after parsing already succeeded at the top level; forcing the rest of a
lazy tree's inflation here should therefore never fail in practice. If it somehow does (a
malformed tail a top-level lazy parse never walked far enough to see), rendering panics rather than
quietly emitting `{}`/`[]` in place of the real content.
*/

use crate::value::ValueKind;
use crate::JsonValue;

/// Render a value as compact JSON, with no whitespace outside of string literals.
pub fn to_compact_string(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(value, None, &mut out, 0);
    out
}

/// Render a value as indented JSON, with a fixed indent width of two spaces and object keys
/// sorted alphabetically.
pub fn to_pretty_string(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(value, Some(2), &mut out, 0);
    out
}

fn write_value(value: &JsonValue, indent: Option<usize>, out: &mut String, depth: usize) {
    match value.kind() {
        ValueKind::Object => write_object(value, indent, out, depth),
        ValueKind::Array => write_array(value, indent, out, depth),
        ValueKind::String => {
            let s = value.as_str().expect("kind matched String");
            write_escaped_str(&s.decoded().unwrap_or_else(|_| s.raw().into()), out);
        }
        ValueKind::Number => {
            out.push_str(value.as_number().expect("kind matched Number").text());
        }
        ValueKind::Boolean => {
            out.push_str(if value.as_bool().expect("kind matched Boolean") {
                "true"
            } else {
                "false"
            });
        }
        ValueKind::Null => out.push_str("null"),
    }
}

fn write_object(value: &JsonValue, indent: Option<usize>, out: &mut String, depth: usize) {
    let object = value.as_object().expect("kind matched Object");
    let mut keys = object
        .keys()
        .unwrap_or_else(|e| panic!("object failed to inflate while rendering: {e}"));
    keys.sort();

    out.push('{');
    write_items(&keys, indent, out, depth, |key, out, depth| {
        write_escaped_str(key, out);
        out.push(':');
        if indent.is_some() {
            out.push(' ');
        }
        let v = object
            .get(key)
            .unwrap_or_else(|e| panic!("object failed to inflate while rendering: {e}"))
            .expect("key came from this object's own `keys()`");
        write_value(&v, indent, out, depth);
    });
    write_closing(indent, out, depth, '}');
}

fn write_array(value: &JsonValue, indent: Option<usize>, out: &mut String, depth: usize) {
    let array = value.as_array().expect("kind matched Array");
    let values = array
        .values()
        .unwrap_or_else(|e| panic!("array failed to inflate while rendering: {e}"));

    out.push('[');
    write_items(&values, indent, out, depth, |v, out, depth| {
        write_value(v, indent, out, depth);
    });
    write_closing(indent, out, depth, ']');
}

fn write_items<T>(
    items: &[T],
    indent: Option<usize>,
    out: &mut String,
    depth: usize,
    mut write_one: impl FnMut(&T, &mut String, usize),
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_newline_indent(indent, out, depth + 1);
        write_one(item, out, depth + 1);
    }
}

fn write_closing(indent: Option<usize>, out: &mut String, depth: usize, closer: char) {
    if let Some(width) = indent {
        out.push('\n');
        out.push_str(&" ".repeat(width * depth));
    }
    out.push(closer);
}

fn write_newline_indent(indent: Option<usize>, out: &mut String, depth: usize) {
    if let Some(width) = indent {
        out.push('\n');
        out.push_str(&" ".repeat(width * depth));
    }
}

fn write_escaped_str(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
