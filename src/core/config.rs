// src/core/config.rs
use crate::core::constants::{
    DEFAULT_LANGUAGE, DICTIONARY_DIR, QUERY_PARAM, RTL_LANGUAGES, STORAGE_KEY,
    SUPPORTED_LANGUAGES,
};
use crate::core::prelude::*;
use crate::dom::Markers;
use serde::Deserialize;

// TOML Configuration Structure
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfig>,
    #[serde(default)]
    language: Option<LanguageConfigToml>,
    #[serde(default)]
    dictionaries: Option<DictionaryConfigToml>,
    #[serde(default)]
    markers: Option<MarkerConfigToml>,
}

#[derive(Debug, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct LanguageConfigToml {
    #[serde(default = "default_supported")]
    supported: Vec<String>,
    #[serde(default = "default_language")]
    default: String,
    #[serde(default = "default_rtl")]
    rtl: Vec<String>,
    #[serde(default = "default_storage_key")]
    storage_key: String,
    #[serde(default = "default_query_param")]
    query_param: String,
    #[serde(default)]
    fetch_default: bool,
}

#[derive(Debug, Deserialize)]
struct DictionaryConfigToml {
    #[serde(default = "default_dir")]
    dir: String,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default = "default_site_root")]
    site_root: String,
}

#[derive(Debug, Deserialize)]
struct MarkerConfigToml {
    #[serde(default = "default_text_marker")]
    text: String,
    #[serde(default = "default_attr_list_marker")]
    attr_list: String,
    #[serde(default = "default_attr_key_prefix")]
    attr_key_prefix: String,
    #[serde(default = "default_switch_marker")]
    switch: String,
    #[serde(default = "default_active_marker")]
    active: String,
    #[serde(default = "default_select_marker")]
    select: String,
    #[serde(default = "default_original_marker")]
    original: String,
    #[serde(default = "default_title_key")]
    title_key: String,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_supported() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
}
fn default_language() -> String {
    DEFAULT_LANGUAGE.into()
}
fn default_rtl() -> Vec<String> {
    RTL_LANGUAGES.iter().map(|l| l.to_string()).collect()
}
fn default_storage_key() -> String {
    STORAGE_KEY.into()
}
fn default_query_param() -> String {
    QUERY_PARAM.into()
}
fn default_dir() -> String {
    DICTIONARY_DIR.into()
}
fn default_site_root() -> String {
    ".".into()
}

// Marker Defaults
fn default_text_marker() -> String {
    Markers::default().text
}
fn default_attr_list_marker() -> String {
    Markers::default().attr_list
}
fn default_attr_key_prefix() -> String {
    Markers::default().attr_key_prefix
}
fn default_switch_marker() -> String {
    Markers::default().switch
}
fn default_active_marker() -> String {
    Markers::default().active
}
fn default_select_marker() -> String {
    Markers::default().select
}
fn default_original_marker() -> String {
    Markers::default().original
}
fn default_title_key() -> String {
    Markers::default().title_key
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub language: LanguageConfig,
    pub dictionaries: DictionaryConfig,
    pub markers: Markers,
}

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub supported: Vec<String>,
    pub default: String,
    pub rtl: Vec<String>,
    pub storage_key: String,
    pub query_param: String,
    /// Fetch dictionaries for the default language too. Off by default: the
    /// hard-coded markup already is the default-language text.
    pub fetch_default: bool,
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub dir: String,
    pub base_url: Option<String>,
    pub site_root: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            supported: default_supported(),
            default: default_language(),
            rtl: default_rtl(),
            storage_key: default_storage_key(),
            query_param: default_query_param(),
            fetch_default: false,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            base_url: None,
            site_root: default_site_root(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            language: LanguageConfig::default(),
            dictionaries: DictionaryConfig::default(),
            markers: Markers::default(),
        }
    }
}

impl LanguageConfig {
    pub fn is_supported(&self, lang: &str) -> bool {
        self.supported.iter().any(|l| l == lang)
    }

    /// Coerces unsupported codes to the default language.
    pub fn normalize(&self, lang: &str) -> String {
        if self.is_supported(lang) {
            lang.to_string()
        } else {
            log::debug!("Unsupported language '{}', using '{}'", lang, self.default);
            self.default.clone()
        }
    }

    pub fn is_rtl(&self, lang: &str) -> bool {
        self.rtl.iter().any(|l| l == lang)
    }

    pub fn direction(&self, lang: &str) -> &'static str {
        if self.is_rtl(lang) {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn is_default(&self, lang: &str) -> bool {
        self.default == lang
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let language = file
            .language
            .map_or_else(LanguageConfig::default, |l| LanguageConfig {
                supported: l.supported,
                default: l.default,
                rtl: l.rtl,
                storage_key: l.storage_key,
                query_param: l.query_param,
                fetch_default: l.fetch_default,
            });

        let dictionaries =
            file.dictionaries
                .map_or_else(DictionaryConfig::default, |d| DictionaryConfig {
                    dir: d.dir,
                    base_url: d.base_url,
                    site_root: d.site_root,
                });

        let markers = file.markers.map_or_else(Markers::default, |m| Markers {
            text: m.text,
            attr_list: m.attr_list,
            attr_key_prefix: m.attr_key_prefix,
            switch: m.switch,
            active: m.active,
            select: m.select,
            original: m.original,
            title_key: m.title_key,
        });

        let config = Self {
            config_path: None,
            log_level: file
                .general
                .map_or_else(default_log_level, |g| g.log_level),
            language,
            dictionaries,
            markers,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.language.supported.is_empty() {
            return Err(AppError::Validation(
                "language.supported must not be empty".into(),
            ));
        }

        if !self.language.is_supported(&self.language.default) {
            return Err(AppError::Validation(format!(
                "Default language '{}' is not in supported {:?}",
                self.language.default, self.language.supported
            )));
        }

        if self.language.query_param.trim().is_empty() {
            return Err(AppError::Validation(
                "language.query_param must not be empty".into(),
            ));
        }

        self.markers.validate()
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        log::debug!("Config loaded from {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub async fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;

        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.language.default, "en");
        assert_eq!(config.language.supported, vec!["en", "fr", "de", "ar"]);
        assert_eq!(config.dictionaries.dir, "lang");
        assert_eq!(config.language.storage_key, "site.lang.session");
        assert!(!config.language.fetch_default);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::from_toml_str(
            r#"
            [language]
            supported = ["de", "he"]
            default = "de"

            [markers]
            text = "data-t"
            "#,
        )
        .unwrap();

        assert_eq!(config.language.default, "de");
        assert!(config.language.is_rtl("he"));
        assert_eq!(config.markers.text, "data-t");
        assert_eq!(config.markers.switch, "data-lang");
    }

    #[test]
    fn default_must_be_supported() {
        let err = Config::from_toml_str(
            r#"
            [language]
            supported = ["fr"]
            default = "en"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::from_toml_str("[language\nsupported = ").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn normalize_and_direction() {
        let lang = LanguageConfig::default();
        assert_eq!(lang.normalize("fr"), "fr");
        assert_eq!(lang.normalize("xx"), "en");
        assert_eq!(lang.normalize("FR"), "en");
        assert_eq!(lang.direction("ar"), "rtl");
        assert_eq!(lang.direction("de"), "ltr");
    }
}
