// src/i18n/error.rs

/// Why a single dictionary document could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    NotFound(String),
    Status { path: String, status: u16 },
    Network { path: String, message: String },
    Parse { path: String, message: String },
    Io { path: String, message: String },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound(path) => path,
            Self::Status { path, .. }
            | Self::Network { path, .. }
            | Self::Parse { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    /// A 404 just means there is no such layer, not that something broke.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "{} -> 404", path),
            Self::Status { path, status } => write!(f, "{} -> {}", path, status),
            Self::Network { path, message } => write!(f, "{}: network error: {}", path, message),
            Self::Parse { path, message } => write!(f, "{}: invalid JSON: {}", path, message),
            Self::Io { path, message } => write!(f, "{}: {}", path, message),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug)]
pub enum TranslationError {
    InvalidLanguage(String),
    NothingLoaded {
        lang: String,
        site: FetchError,
        page: FetchError,
    },
    Fetch(FetchError),
}

impl From<FetchError> for TranslationError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLanguage(lang) => write!(f, "Invalid language: {}", lang),
            Self::NothingLoaded { lang, site, page } => write!(
                f,
                "No dictionary loaded for '{}' ({}; {})",
                lang, site, page
            ),
            Self::Fetch(err) => write!(f, "Load error: {}", err),
        }
    }
}

impl std::error::Error for TranslationError {}
