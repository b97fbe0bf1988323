/*!
A small path accessor built entirely on the public [`crate::value`] API — it has no visibility
into inflation state and cannot force materialization any more eagerly than `get`/`get` already
would.
*/

use crate::JsonValue;

/// Walk a dotted/bracket path such as `a.b[0].c` and return the value found, or `None` if any
/// segment is missing, out of range, or not a container.
pub fn get_path(value: &JsonValue, path: &str) -> Option<JsonValue> {
    let mut current = value.clone();

    for segment in Segments::new(path) {
        current = match segment {
            Segment::Key(key) => current.as_object()?.get(key).ok()??,
            Segment::Index(index) => current.as_array()?.get(index).ok()?,
        };
    }

    Some(current)
}

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(path: &'a str) -> Self {
        Segments { rest: path }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(stripped) = self.rest.strip_prefix('.') {
            self.rest = stripped;
        }

        if let Some(stripped) = self.rest.strip_prefix('[') {
            let close = stripped.find(']')?;
            let (index_str, after) = stripped.split_at(close);
            self.rest = &after[1..];
            let index = index_str.parse().ok()?;
            return Some(Segment::Index(index));
        }

        let end = self.rest.find(['.', '[']).unwrap_or(self.rest.len());
        let (key, after) = self.rest.split_at(end);
        self.rest = after;

        if key.is_empty() {
            return None;
        }

        Some(Segment::Key(key))
    }
}
