pub const APP_TITLE: &str = "SITE I18N";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONFIG_FILE_NAME: &str = "site-i18n.toml";

pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr", "de", "ar"];
pub const DEFAULT_LANGUAGE: &str = "en";
pub const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

pub const DICTIONARY_DIR: &str = "lang";
pub const STORAGE_KEY: &str = "site.lang.session";
pub const QUERY_PARAM: &str = "lang";
pub const TITLE_KEY: &str = "meta.title";
pub const INDEX_PAGE: &str = "index";
