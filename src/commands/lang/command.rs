use crate::commands::command::Command;
use crate::commands::site;
use crate::core::prelude::*;
use crate::i18n::loader::{page_path, site_path};
use std::sync::Arc;

/// Lists the supported languages, or details one of them.
#[derive(Debug)]
pub struct LanguageCommand {
    config: Arc<Config>,
}

impl LanguageCommand {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn show_status(&self) -> String {
        let lang = &self.config.language;
        let list = lang
            .supported
            .iter()
            .map(|code| {
                let mut entry = code.clone();
                if lang.is_default(code) {
                    entry.push_str(" (default)");
                }
                if lang.is_rtl(code) {
                    entry.push_str(" [rtl]");
                }
                entry
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Languages: {}\nStorage key: {}\nQuery parameter: ?{}=<code>",
            list, lang.storage_key, lang.query_param
        )
    }

    fn show_language(&self, code: &str) -> Result<String> {
        let code = site::require_supported(&self.config, code)?;
        let lang = &self.config.language;
        let dir = &self.config.dictionaries.dir;

        let fetched = if lang.is_default(&code) && !lang.fetch_default {
            "no (markup text is used)"
        } else {
            "yes"
        };

        Ok(format!(
            "Language: {}\nDirection: {}\nFetched: {}\nSite file: {}\nPage files: {}",
            code,
            lang.direction(&code),
            fetched,
            site_path(dir, &code),
            page_path(dir, "<page>", &code)
        ))
    }
}

impl Command for LanguageCommand {
    fn name(&self) -> &'static str {
        "langs"
    }

    fn description(&self) -> &'static str {
        "Show supported languages"
    }

    fn usage(&self) -> &'static str {
        "langs [lang]"
    }

    fn matches(&self, command: &str) -> bool {
        command.trim().to_lowercase().starts_with("lang")
    }

    fn execute_sync(&self, args: &[&str]) -> Result<String> {
        match args.first() {
            None => Ok(self.show_status()),
            Some(&code) => self.show_language(code),
        }
    }

    fn priority(&self) -> u8 {
        70
    }
}
