// src/commands/site.rs
use crate::core::prelude::*;
use crate::i18n::{DictionarySource, FetchError, FsSource, HttpSource, LoadReport, Loader};

/// Dictionary source for the CLI: the site on disk, or a running server when
/// `dictionaries.base_url` is configured.
#[derive(Debug, Clone)]
pub enum SiteSource {
    Fs(FsSource),
    Http(HttpSource),
}

impl SiteSource {
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.dictionaries.base_url.as_deref() {
            Some(base) => HttpSource::new(base)
                .map(Self::Http)
                .map_err(|e| AppError::Config(e.to_string())),
            None => Ok(Self::Fs(FsSource::new(&config.dictionaries.site_root))),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl DictionarySource for SiteSource {
    async fn fetch(&self, path: &str) -> std::result::Result<Dictionary, FetchError> {
        match self {
            Self::Fs(source) => source.fetch(path).await,
            Self::Http(source) => source.fetch(path).await,
        }
    }
}

/// The CLI is strict where the browser is forgiving: unknown codes are errors.
pub fn require_supported(config: &Config, lang: &str) -> Result<String> {
    let lang = lang.trim().to_lowercase();
    if config.language.is_supported(&lang) {
        Ok(lang)
    } else {
        Err(AppError::Translation(TranslationError::InvalidLanguage(
            format!("{} (supported: {})", lang, config.language.supported.join(", ")),
        )))
    }
}

pub async fn load(config: &Config, lang: &str, page: Option<&&str>) -> Result<LoadReport> {
    let lang = require_supported(config, lang)?;
    let pathname = page.copied().unwrap_or("/");

    let loader = Loader::new(SiteSource::from_config(config)?, config.dictionaries.dir.clone());
    Ok(loader.load(&lang, pathname).await)
}

pub fn describe_layer(name: &str, report_layer: &crate::i18n::Contribution) -> String {
    match report_layer.error() {
        None => format!("{}: loaded", name),
        Some(e) if e.is_missing() => format!("{}: missing ({})", name, e.path()),
        Some(e) => format!("{}: failed ({})", name, e),
    }
}
