//! Key-path resolution over a JSON data document.
//!
//! Paths are dot-separated lookup chains like `user.address.city`. Arrays
//! are indexed with numeric segments, so `items.0` is the first element of
//! the array stored under `items`.

use serde_json::Value;

/// Resolve a dot-separated key path against a data document.
///
/// Returns `None` ("not found") when the path is empty, a segment is absent,
/// or an intermediate node is not indexable. A present `null` resolves to
/// `Some(Value::Null)`, which callers treat differently from a miss.
pub fn resolve<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
