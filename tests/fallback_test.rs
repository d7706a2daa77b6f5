// tests/fallback_test.rs
// Own test binary: it installs the global logger.
use log::{Level, LevelFilter};
use site_i18n::dom::{Document, MemoryDocument};
use site_i18n::i18n::{FetchError, MemorySource};
use site_i18n::output::logging::{self, AppLogger};
use site_i18n::state::{Location, MemoryLocation, MemoryStorage, SessionStorage};
use site_i18n::{Config, I18n, SetLangOptions};

#[tokio::test]
async fn failed_fetches_fall_back_with_one_error() {
    logging::init(LevelFilter::Debug).unwrap();

    let source = MemorySource::new()
        .with_failure(
            "/lang/ar.json",
            FetchError::Network {
                path: "/lang/ar.json".into(),
                message: "connection refused".into(),
            },
        )
        .with_failure(
            "/lang/pages/index.ar.json",
            FetchError::Status {
                path: "/lang/pages/index.ar.json".into(),
                status: 500,
            },
        );

    let doc = MemoryDocument::new();
    let home = doc.add(doc.root(), "a", &[("data-i18n", "nav.home")], "Home");
    let ar = doc.add(doc.root(), "a", &[("data-lang", "ar")], "AR");
    let en = doc.add(doc.root(), "a", &[("data-lang", "en")], "EN");

    let i18n = I18n::new(
        &Config::default(),
        doc,
        source,
        MemoryStorage::new(),
        MemoryLocation::new("https://site.test/"),
    );
    AppLogger::get_messages().unwrap();

    let rendered = i18n.set_lang("ar", SetLangOptions::default()).await;

    let doc = i18n.document();
    assert_eq!(rendered, "en");
    assert_eq!(doc.attribute(&doc.root(), "lang"), Some("en".to_string()));
    assert_eq!(doc.attribute(&doc.root(), "dir"), Some("ltr".to_string()));
    assert_eq!(doc.text(&home), "Home");
    assert!(doc.attribute(&en, "data-active").is_some());
    assert!(doc.attribute(&ar, "data-active").is_none());
    assert_eq!(i18n.state().location().href(), "https://site.test/?lang=en");
    assert_eq!(
        i18n.state().storage().get("site.lang.session"),
        Some("en".to_string())
    );

    let errors: Vec<_> = AppLogger::get_messages()
        .unwrap()
        .into_iter()
        .filter(|m| m.level == Level::Error)
        .collect();
    assert_eq!(errors.len(), 1, "errors: {:?}", errors);
    assert!(errors[0].message.contains("load/apply failed"));
}
