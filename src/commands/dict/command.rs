// src/commands/dict/command.rs
use crate::commands::command::Command;
use crate::commands::site;
use crate::core::prelude::*;
use std::sync::Arc;

/// Prints the merged dictionary a page would get for a language.
#[derive(Debug)]
pub struct DictCommand {
    config: Arc<Config>,
}

impl DictCommand {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for DictCommand {
    fn name(&self) -> &'static str {
        "dict"
    }

    fn description(&self) -> &'static str {
        "Show the merged dictionary for a language and page"
    }

    fn usage(&self) -> &'static str {
        "dict <lang> [page-path]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "dict" | "dictionary")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        let Some(lang) = args.first() else {
            return Err(AppError::Validation(format!("usage: {}", self.usage())));
        };

        let report = site::load(&self.config, lang, args.get(1)).await?;
        let header = format!(
            "# {} / page '{}'\n# {}\n# {}",
            report.lang,
            report.page,
            site::describe_layer("site", &report.site),
            site::describe_layer("page", &report.page_layer),
        );

        Ok(format!("{}\n{}", header, report.dictionary.to_pretty_json()))
    }

    fn priority(&self) -> u8 {
        80
    }
}
