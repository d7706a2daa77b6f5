// tests/command_system_tests.rs
use site_i18n::{create_handler, Config};
use std::fs;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("lang/pages")).unwrap();
    fs::write(
        dir.path().join("lang/fr.json"),
        r#"{"nav":{"home":"Accueil","count":3}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("lang/pages/about.fr.json"),
        r#"{"nav":{"home":"À propos"},"meta":{"title":"Qui sommes-nous"}}"#,
    )
    .unwrap();
    dir
}

fn config_for(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.dictionaries.site_root = dir.path().to_string_lossy().into_owned();
    config
}

#[test]
fn sync_commands() {
    let handler = create_handler(Config::default());
    assert!(!handler.list_commands().is_empty());

    let version = handler.handle_input("version");
    assert!(version.success);
    assert!(version.message.starts_with("SITE I18N v"));

    let langs = handler.handle_input("langs");
    assert!(langs.success);
    assert!(langs.message.contains("en (default)"));
    assert!(langs.message.contains("ar [rtl]"));

    let ar = handler.handle_input("langs ar");
    assert!(ar.message.contains("Direction: rtl"));
    assert!(ar.message.contains("/lang/pages/<page>.ar.json"));

    assert!(!handler.handle_input("langs xx").success);
    assert!(!handler.handle_input("unknown_xyz").success);
    assert!(!handler.handle_input("   ").success);

    let help = handler.handle_input("help");
    assert!(help.success);
    assert!(help.message.contains("dict <lang> [page-path]"));
}

#[test]
fn pick_follows_priority() {
    let handler = create_handler(Config::default());

    let r = handler.handle_input("pick https://site.test/?lang=de fr ar");
    assert!(r.message.starts_with("de (Query"));

    let r = handler.handle_input("pick https://site.test/ fr ar");
    assert!(r.message.starts_with("fr (Storage"));

    let r = handler.handle_input("pick https://site.test/ - ar");
    assert_eq!(r.message, "ar (Document, dir=rtl)");

    let r = handler.handle_input("pick https://site.test/?lang=xx");
    assert!(r.message.starts_with("en (Default"));

    assert!(!handler.handle_input("pick not-a-url").success);
}

#[tokio::test]
async fn dict_and_get_read_the_site() {
    let dir = site();
    let handler = create_handler(config_for(&dir));

    let dict = handler.handle_input_async("dict fr /about.html").await;
    assert!(dict.success, "{}", dict.message);
    assert!(dict.message.contains("page 'about'"));
    assert!(dict.message.contains("À propos"));
    assert!(dict.message.contains("Qui sommes-nous"));

    let home = handler.handle_input_async("get fr nav.home").await;
    assert_eq!(home.message, "Accueil");

    let about = handler.handle_input_async("get fr nav.home /about.html").await;
    assert_eq!(about.message, "À propos");

    let count = handler.handle_input_async("get fr nav.count").await;
    assert!(count.message.contains("is not text"));

    let missing = handler.handle_input_async("get fr nav.nowhere").await;
    assert!(missing.message.contains("not found"));

    let index = handler.handle_input_async("dict fr").await;
    assert!(index.message.contains("page: missing"));
}

#[tokio::test]
async fn dict_rejects_unsupported_language() {
    let dir = site();
    let handler = create_handler(config_for(&dir));

    let r = handler.handle_input_async("dict es").await;
    assert!(!r.success);
    assert!(r.message.contains("Invalid language"));

    assert!(!handler.handle_input_async("get fr").await.success);
}

#[tokio::test]
async fn init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let handler = create_handler(Config::default());
    let target = dir.path().to_string_lossy().into_owned();

    let first = handler.handle_input_async(&format!("init {}", target)).await;
    assert!(first.success);
    assert!(first.message.starts_with("Created"));

    let config = Config::from_file(dir.path().join("site-i18n.toml"))
        .await
        .unwrap();
    assert_eq!(config.language.default, "en");

    let second = handler.handle_input_async(&format!("init {}", target)).await;
    assert!(second.message.starts_with("Config already exists"));
}
