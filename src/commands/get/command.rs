// src/commands/get/command.rs
use crate::commands::command::Command;
use crate::commands::site;
use crate::core::prelude::*;
use std::sync::Arc;

/// Resolves one dotted key against the merged dictionary.
#[derive(Debug)]
pub struct GetCommand {
    config: Arc<Config>,
}

impl GetCommand {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn description(&self) -> &'static str {
        "Resolve a dotted key for a language and page"
    }

    fn usage(&self) -> &'static str {
        "get <lang> <key> [page-path]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "get" | "resolve")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        let (Some(lang), Some(key)) = (args.first(), args.get(1)) else {
            return Err(AppError::Validation(format!("usage: {}", self.usage())));
        };

        let report = site::load(&self.config, lang, args.get(2)).await?;
        match report.dictionary.get(key) {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(other) => Ok(format!("{} is not text: {}", key, other)),
            None => Ok(format!("{} not found for '{}'", key, report.lang)),
        }
    }

    fn priority(&self) -> u8 {
        75
    }
}
