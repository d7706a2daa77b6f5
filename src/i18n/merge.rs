// src/i18n/merge.rs
use serde_json::{Map, Value};

/// Deep-merges `overlay` over `base` into a new map.
///
/// Objects present on both sides merge recursively. Everything else from the
/// overlay (strings, numbers, arrays, null) replaces the base value whole.
pub fn merge(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();

    for (key, value) in overlay {
        let merged = match (out.get(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(merge(existing, incoming))
            }
            _ => value.clone(),
        };
        out.insert(key.clone(), merged);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn objects_merge_scalars_overwrite() {
        let base = map(json!({"a": {"x": 1}, "b": 2}));
        let overlay = map(json!({"a": {"y": 2}, "b": 3}));

        let out = merge(&base, &overlay);
        assert_eq!(Value::Object(out), json!({"a": {"x": 1, "y": 2}, "b": 3}));
    }

    #[test]
    fn arrays_are_replaced_whole() {
        let base = map(json!({"list": ["a", "b", "c"]}));
        let overlay = map(json!({"list": ["z"]}));

        let out = merge(&base, &overlay);
        assert_eq!(out["list"], json!(["z"]));
    }

    #[test]
    fn base_is_left_untouched() {
        let base = map(json!({"nav": {"home": "Home"}}));
        let overlay = map(json!({"nav": {"home": "Start"}}));

        let _ = merge(&base, &overlay);
        assert_eq!(base["nav"]["home"], json!("Home"));
    }

    #[test]
    fn type_mismatch_takes_overlay() {
        let base = map(json!({"a": "text", "b": {"deep": "x"}}));
        let overlay = map(json!({"a": {"now": "object"}, "b": "flat"}));

        let out = merge(&base, &overlay);
        assert_eq!(out["a"], json!({"now": "object"}));
        assert_eq!(out["b"], json!("flat"));
    }

    #[test]
    fn overlay_adds_new_sections() {
        let base = map(json!({"nav": {"home": "Home"}}));
        let overlay = map(json!({"meta": {"title": "Start Page"}}));

        let out = merge(&base, &overlay);
        assert_eq!(out["nav"]["home"], json!("Home"));
        assert_eq!(out["meta"]["title"], json!("Start Page"));
    }
}
