use crate::types::{Field, Record};

/// Resolve a dot-separated `path` against `record`.
///
/// Every segment but the last must name a nested record; a missing key or a
/// scalar in an intermediate position yields `None`. The final segment's
/// field is returned unless it is missing or holds [`Value::Null`].
/// An empty path, or a path with an empty segment (`"a..b"`, `".a"`), is
/// never resolvable.
///
/// [`Value::Null`]: crate::Value::Null
#[must_use]
pub fn extract<'a>(record: &'a Record, path: &str) -> Option<&'a Field> {
    let mut current = record;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            return None;
        }
        let field = current.field(segment)?;
        if segments.peek().is_none() {
            return match field {
                Field::Value(v) if v.is_null() => None,
                found => Some(found),
            };
        }
        current = field.as_record()?;
    }

    None
}
