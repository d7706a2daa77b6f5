// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::constants::CONFIG_FILE_NAME;
use crate::core::prelude::*;
use std::path::{Path, PathBuf};
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
log_level = "info"

[language]
supported = ["en", "fr", "de", "ar"]
# Rendered from the markup as-is; no dictionary is fetched unless fetch_default = true
default = "en"
rtl = ["ar", "fa", "he", "ur"]
storage_key = "site.lang.session"
query_param = "lang"
fetch_default = false

[dictionaries]
# /{dir}/{lang}.json and /{dir}/pages/{page}.{lang}.json
dir = "lang"
site_root = "."
# base_url = "http://localhost:8080"

[markers]
text = "data-i18n"
attr_list = "data-i18n-attr"
attr_key_prefix = "data-i18n-"
switch = "data-lang"
active = "data-active"
select = "data-lang-select"
original = "data-i18n-original"
title_key = "meta.title"
"#;

/// Writes the default config into `dir` if there is none yet. Returns the
/// path and whether it was created.
pub async fn ensure_config_exists(dir: &Path) -> Result<(PathBuf, bool)> {
    if !dir.exists() {
        fs::create_dir_all(dir).await.map_err(AppError::Io)?;
        log::debug!("Config dir created: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok((config_path, false));
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .await
        .map_err(AppError::Io)?;
    log::info!("Config file created: {}", config_path.display());

    Ok((config_path, true))
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(CONFIG_FILE_NAME),
        PathBuf::from(".site-i18n").join(CONFIG_FILE_NAME),
    ];
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_FILE_NAME));
        }
    }
    paths
}
