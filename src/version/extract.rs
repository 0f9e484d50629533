//! Locate a version value inside a JSON document

use serde_json::Value;

use crate::version::error::FetchError;

/// Extract the version stored under `key` in `document`
///
/// `key` is a dot-separated path. Each segment indexes an object field, or an
/// array element when the current value is an array and the segment is a
/// decimal index. A top-level field whose name contains dots (e.g. "tag.name")
/// wins over path traversal. An empty key selects the document itself.
///
/// Examples:
/// - `{"tag_name": "v1.2.0"}` with "tag_name" -> "v1.2.0"
/// - `{"data": {"version": "2.0"}}` with "data.version" -> "2.0"
/// - `[{"name": "v3"}]` with "0.name" -> "v3"
/// - `{"version": 1.2}` with "version" -> "1.2"
pub fn extract_version(document: &Value, key: &str) -> Result<String, FetchError> {
    let value = lookup(document, key).ok_or_else(|| FetchError::KeyNotFound(key.to_string()))?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(FetchError::NotAString(key.to_string())),
    }
}

fn lookup<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return Some(document);
    }

    if let Some(value) = document.as_object().and_then(|map| map.get(key)) {
        return Some(value);
    }

    key.split('.').try_fold(document, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
