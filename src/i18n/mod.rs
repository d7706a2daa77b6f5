// src/i18n/mod.rs
pub mod error;
pub mod loader;
pub mod merge;
pub mod resolve;
pub mod source;
pub mod types;

pub use error::{FetchError, TranslationError};
pub use loader::{page_key, Contribution, LoadReport, Loader};
#[cfg(not(target_arch = "wasm32"))]
pub use source::FsSource;
pub use source::{DictionarySource, HttpSource, MemorySource};
pub use types::Dictionary;
