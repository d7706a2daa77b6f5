// src/core/prelude.rs

// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// i18n essentials
pub use crate::i18n::{Dictionary, TranslationError};
