// src/i18n/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One language's translations: string leaves, possibly nested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Map<String, Value>);

impl Dictionary {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses a JSON document. Anything but a top-level object is rejected.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Value at a dotted key, whatever its type.
    pub fn get(&self, key: &str) -> Option<&Value> {
        super::resolve::resolve(&self.0, key)
    }

    /// String leaf at a dotted key. Numbers, arrays and objects do not count,
    /// but a string inside an array does (`"features.1"`).
    pub fn get_str(&self, key: &str) -> Option<&str> {
        super::resolve::resolve_str(&self.0, key)
    }

    /// New dictionary with `overlay` deep-merged over `self`.
    pub fn merged(&self, overlay: &Dictionary) -> Dictionary {
        Self(super::merge::merge(&self.0, &overlay.0))
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".into())
    }
}

impl From<Map<String, Value>> for Dictionary {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
