// src/i18n/resolve.rs
use serde_json::{Map, Value};

/// Walks a dotted key (`"meta.title"`) one segment at a time.
///
/// Arrays are indexed by numeric segments (`"features.1"`). Returns `None` as
/// soon as a segment is missing, null, or the current value is a scalar.
/// Never panics, whatever the key looks like.
pub fn resolve<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = map.get(first).filter(|v| !v.is_null())?;

    for segment in segments {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.filter(|v| !v.is_null())?;
    }

    Some(current)
}

pub fn resolve_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    resolve(map, key).and_then(Value::as_str)
}
