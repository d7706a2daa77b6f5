// src/i18n/loader.rs
use super::error::{FetchError, TranslationError};
use super::source::DictionarySource;
use super::types::Dictionary;
use crate::core::constants::INDEX_PAGE;

/// Page identity from a location path: `/` and `/index.html` give `index`,
/// `/about.html` gives `about`.
pub fn page_key(pathname: &str) -> String {
    let file = pathname
        .rsplit('/')
        .next()
        .filter(|f| !f.is_empty())
        .unwrap_or("index.html");

    match file.split('.').next() {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => INDEX_PAGE.to_string(),
    }
}

pub fn site_path(dir: &str, lang: &str) -> String {
    format!("/{}/{}.json", dir, lang)
}

pub fn page_path(dir: &str, page: &str, lang: &str) -> String {
    format!("/{}/pages/{}.{}.json", dir, page, lang)
}

/// Outcome of fetching one layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    Loaded(Dictionary),
    Failed(FetchError),
}

impl Contribution {
    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Loaded(dict) => Some(dict),
            Self::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// True for a plain 404: the layer does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Failed(e) if e.is_missing())
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Loaded(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub lang: String,
    pub page: String,
    pub site: Contribution,
    pub page_layer: Contribution,
    /// Site-wide layer with the page layer merged on top. Failed layers
    /// contribute nothing.
    pub dictionary: Dictionary,
}

impl LoadReport {
    /// Treats "neither layer loaded" as a failure; anything else is usable.
    pub fn into_result(self) -> Result<Dictionary, TranslationError> {
        match (self.site, self.page_layer) {
            (Contribution::Failed(site), Contribution::Failed(page)) => {
                Err(TranslationError::NothingLoaded {
                    lang: self.lang,
                    site,
                    page,
                })
            }
            _ => Ok(self.dictionary),
        }
    }
}

pub struct Loader<S> {
    source: S,
    dir: String,
}

impl<S: DictionarySource> Loader<S> {
    pub fn new(source: S, dir: impl Into<String>) -> Self {
        Self {
            source,
            dir: dir.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Loads both layers for `lang` on the page at `pathname`, one after the
    /// other. Never fails outright; see [`LoadReport::into_result`].
    pub async fn load(&self, lang: &str, pathname: &str) -> LoadReport {
        let page = page_key(pathname);

        let site = self.fetch_layer(&site_path(&self.dir, lang)).await;
        let page_layer = self
            .fetch_layer(&page_path(&self.dir, &page, lang))
            .await;

        let empty = Dictionary::new();
        let dictionary = site
            .dictionary()
            .unwrap_or(&empty)
            .merged(page_layer.dictionary().unwrap_or(&empty));

        log::debug!(
            "Loaded '{}' for page '{}': site={}, page={}, {} top-level keys",
            lang,
            page,
            site.is_loaded(),
            page_layer.is_loaded(),
            dictionary.len()
        );

        LoadReport {
            lang: lang.to_string(),
            page,
            site,
            page_layer,
            dictionary,
        }
    }

    async fn fetch_layer(&self, path: &str) -> Contribution {
        match self.source.fetch(path).await {
            Ok(dict) => Contribution::Loaded(dict),
            Err(e) => {
                if e.is_missing() {
                    log::debug!("No dictionary at {}", path);
                } else {
                    log::warn!("Dictionary fetch failed: {}", e);
                }
                Contribution::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::source::MemorySource;

    #[test]
    fn page_key_from_pathname() {
        assert_eq!(page_key("/"), "index");
        assert_eq!(page_key(""), "index");
        assert_eq!(page_key("/index.html"), "index");
        assert_eq!(page_key("/about.html"), "about");
        assert_eq!(page_key("/docs/guide.v2.html"), "guide");
        assert_eq!(page_key("/docs/"), "index");
        assert_eq!(page_key("/.hidden"), "index");
        assert_eq!(page_key("/contact"), "contact");
    }

    #[test]
    fn layer_paths() {
        assert_eq!(site_path("lang", "fr"), "/lang/fr.json");
        assert_eq!(page_path("lang", "index", "fr"), "/lang/pages/index.fr.json");
    }

    #[tokio::test]
    async fn page_layer_wins_conflicts() {
        let source = MemorySource::new()
            .with_document("/lang/fr.json", r#"{"nav":{"home":"Home","about":"À propos"}}"#)
            .with_document(
                "/lang/pages/index.fr.json",
                r#"{"nav":{"home":"Start"},"meta":{"title":"Start Page"}}"#,
            );
        let loader = Loader::new(source, "lang");

        let dict = loader.load("fr", "/").await.into_result().unwrap();
        assert_eq!(dict.get_str("nav.home"), Some("Start"));
        assert_eq!(dict.get_str("nav.about"), Some("À propos"));
        assert_eq!(dict.get_str("meta.title"), Some("Start Page"));
        assert_eq!(
            loader.source().requests(),
            vec!["/lang/fr.json", "/lang/pages/index.fr.json"]
        );
    }

    #[tokio::test]
    async fn one_failed_layer_is_tolerated() {
        let source = MemorySource::new()
            .with_document("/lang/de.json", r#"{"nav":{"home":"Startseite"}}"#)
            .with_document("/lang/pages/about.de.json", "{ not json");
        let loader = Loader::new(source, "lang");

        let report = loader.load("de", "/about.html").await;
        assert_eq!(report.page, "about");
        assert!(report.site.is_loaded());
        assert!(matches!(
            report.page_layer.error(),
            Some(FetchError::Parse { .. })
        ));

        let dict = report.into_result().unwrap();
        assert_eq!(dict.get_str("nav.home"), Some("Startseite"));
    }

    #[tokio::test]
    async fn missing_page_layer_is_distinguishable_from_outage() {
        let source = MemorySource::new()
            .with_document("/lang/fr.json", "{}")
            .with_failure(
                "/lang/pages/index.fr.json",
                FetchError::Status {
                    path: "/lang/pages/index.fr.json".into(),
                    status: 503,
                },
            );
        let loader = Loader::new(source, "lang");
        let report = loader.load("fr", "/index.html").await;
        assert!(!report.page_layer.is_missing());

        let source = MemorySource::new().with_document("/lang/fr.json", "{}");
        let loader = Loader::new(source, "lang");
        let report = loader.load("fr", "/index.html").await;
        assert!(report.page_layer.is_missing());
    }

    #[tokio::test]
    async fn both_layers_failing_is_an_error() {
        let loader = Loader::new(MemorySource::new(), "lang");
        let report = loader.load("ar", "/").await;
        assert!(report.dictionary.is_empty());

        match report.into_result() {
            Err(TranslationError::NothingLoaded { lang, site, page }) => {
                assert_eq!(lang, "ar");
                assert!(site.is_missing());
                assert_eq!(page.path(), "/lang/pages/index.ar.json");
            }
            other => panic!("expected NothingLoaded, got {:?}", other),
        }
    }
}
