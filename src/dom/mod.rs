// src/dom/mod.rs
pub mod apply;
pub mod document;
pub mod memory;

pub use apply::{apply_translations, set_root_language, snapshot_originals, update_controls, ApplyStats};
pub use document::Document;
pub use memory::{MemoryDocument, NodeId};

use crate::core::constants::TITLE_KEY;

#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    Write { target: String, message: String },
    NotFound(String),
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write { target, message } => write!(f, "cannot write {}: {}", target, message),
            Self::NotFound(what) => write!(f, "not found: {}", what),
        }
    }
}

impl std::error::Error for DomError {}

pub type DomResult<T> = std::result::Result<T, DomError>;

/// Attribute names the applier looks for in markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Markers {
    /// `data-i18n="nav.home"`: replace text content.
    pub text: String,
    /// `data-i18n-attr="placeholder|title"`: attributes to translate.
    pub attr_list: String,
    /// Prefix of the per-attribute key marker (`data-i18n-placeholder`).
    pub attr_key_prefix: String,
    /// `data-lang="fr"`: switch trigger and active-state target.
    pub switch: String,
    /// Boolean attribute set on the active switch controls.
    pub active: String,
    /// Optional single-choice control.
    pub select: String,
    /// Where the original text is snapshotted on init.
    pub original: String,
    pub title_key: String,
}

crate::impl_default!(
    Markers,
    Markers {
        text: "data-i18n".into(),
        attr_list: "data-i18n-attr".into(),
        attr_key_prefix: "data-i18n-".into(),
        switch: "data-lang".into(),
        active: "data-active".into(),
        select: "data-lang-select".into(),
        original: "data-i18n-original".into(),
        title_key: TITLE_KEY.into(),
    }
);

impl Markers {
    pub fn attr_key(&self, attribute: &str) -> String {
        format!("{}{}", self.attr_key_prefix, attribute)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("text", &self.text),
            ("attr_list", &self.attr_list),
            ("attr_key_prefix", &self.attr_key_prefix),
            ("switch", &self.switch),
            ("active", &self.active),
            ("select", &self.select),
            ("original", &self.original),
            ("title_key", &self.title_key),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(crate::AppError::Validation(format!(
                "markers.{} must not be empty",
                name
            ))),
            None => Ok(()),
        }
    }
}
