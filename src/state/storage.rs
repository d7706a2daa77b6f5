// src/state/storage.rs
use super::StateError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Per-tab key/value storage (`sessionStorage` in a browser).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StateError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    disabled: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Behaves like storage blocked by privacy settings: reads see nothing,
    /// writes fail.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        if self.disabled.get() {
            return None;
        }
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StateError> {
        if self.disabled.get() {
            return Err(StateError::Storage("storage is disabled".into()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
