// src/state/mod.rs
pub mod location;
pub mod storage;

pub use location::{Location, MemoryLocation};
pub use storage::{MemoryStorage, SessionStorage};

use crate::core::config::LanguageConfig;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum StateError {
    Storage(String),
    History(String),
    Url(String),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::History(msg) => write!(f, "History error: {}", msg),
            Self::Url(msg) => write!(f, "URL error: {}", msg),
        }
    }
}

impl std::error::Error for StateError {}

/// Where the initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Query,
    Storage,
    Document,
    Default,
}

/// The active language plus the capabilities it is read from and persisted to.
pub struct LanguageState<S, L> {
    config: LanguageConfig,
    storage: S,
    location: L,
    current: RefCell<String>,
}

impl<S: SessionStorage, L: Location> LanguageState<S, L> {
    pub fn new(config: LanguageConfig, storage: S, location: L) -> Self {
        let current = RefCell::new(config.default.clone());
        Self {
            config,
            storage,
            location,
            current,
        }
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn set_current(&self, lang: &str) {
        *self.current.borrow_mut() = lang.to_string();
    }

    pub fn pathname(&self) -> String {
        location::pathname(&self.location.href())
    }

    /// First supported candidate of: URL query parameter, stored session
    /// value, the document's own `lang` attribute, then the default.
    pub fn pick_initial(&self, document_lang: Option<&str>) -> (String, LanguageSource) {
        let supported = |lang: &Option<String>| {
            lang.as_deref()
                .filter(|l| self.config.is_supported(l))
                .map(str::to_string)
        };

        let query = location::query_param(&self.location.href(), &self.config.query_param);
        if let Some(lang) = supported(&query) {
            return (lang, LanguageSource::Query);
        }

        let stored = self.storage.get(&self.config.storage_key);
        if let Some(lang) = supported(&stored) {
            return (lang, LanguageSource::Storage);
        }

        if let Some(lang) = supported(&document_lang.map(str::to_string)) {
            return (lang, LanguageSource::Document);
        }

        (self.config.default.clone(), LanguageSource::Default)
    }

    /// Persists `lang` for the rest of the tab session. Failures are logged
    /// and otherwise ignored.
    pub fn remember(&self, lang: &str) {
        if let Err(e) = self.storage.set(&self.config.storage_key, lang) {
            log::debug!("Could not remember language '{}': {}", lang, e);
        }
    }

    /// Rewrites the language query parameter in place. Failures are logged
    /// and otherwise ignored.
    pub fn reflect_in_url(&self, lang: &str) {
        let result = location::with_query_param(
            &self.location.href(),
            &self.config.query_param,
            lang,
        )
        .and_then(|target| self.location.replace(&target));

        if let Err(e) = result {
            log::debug!("Could not update URL to '{}': {}", lang, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(href: &str, stored: Option<&str>) -> LanguageState<MemoryStorage, MemoryLocation> {
        let config = LanguageConfig::default();
        let mut storage = MemoryStorage::new();
        if let Some(value) = stored {
            storage = storage.with_item(&config.storage_key, value);
        }
        LanguageState::new(config, storage, MemoryLocation::new(href))
    }

    #[test]
    fn query_wins_over_everything() {
        let s = state("https://site.test/?lang=de", Some("fr"));
        assert_eq!(s.pick_initial(Some("ar")), ("de".into(), LanguageSource::Query));
    }

    #[test]
    fn stored_value_beats_document() {
        let s = state("https://site.test/", Some("fr"));
        assert_eq!(s.pick_initial(Some("ar")), ("fr".into(), LanguageSource::Storage));
    }

    #[test]
    fn document_lang_then_default() {
        let s = state("https://site.test/", None);
        assert_eq!(s.pick_initial(Some("ar")), ("ar".into(), LanguageSource::Document));
        assert_eq!(s.pick_initial(None), ("en".into(), LanguageSource::Default));
    }

    #[test]
    fn unsupported_candidates_are_skipped() {
        let s = state("https://site.test/?lang=xx", Some("zz"));
        assert_eq!(s.pick_initial(Some("en-US")), ("en".into(), LanguageSource::Default));

        let s = state("https://site.test/?lang=xx", Some("de"));
        assert_eq!(s.pick_initial(None), ("de".into(), LanguageSource::Storage));
    }

    #[test]
    fn disabled_storage_is_tolerated() {
        let s = state("https://site.test/", Some("fr"));
        s.storage().set_disabled(true);
        s.remember("de");
        assert_eq!(s.pick_initial(None).1, LanguageSource::Default);
    }

    #[test]
    fn remember_and_reflect() {
        let s = state("https://site.test/about.html#team", None);
        s.remember("ar");
        s.reflect_in_url("ar");

        assert_eq!(s.storage().get("site.lang.session"), Some("ar".into()));
        assert_eq!(s.location().href(), "https://site.test/about.html?lang=ar#team");
        assert_eq!(s.pathname(), "/about.html");
    }
}
