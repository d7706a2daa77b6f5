// src/commands/pick/command.rs
use crate::commands::command::Command;
use crate::core::prelude::*;
use crate::state::{LanguageState, MemoryLocation, MemoryStorage};
use std::sync::Arc;

/// Shows which language a visitor would land on.
#[derive(Debug)]
pub struct PickCommand {
    config: Arc<Config>,
}

impl PickCommand {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for PickCommand {
    fn name(&self) -> &'static str {
        "pick"
    }

    fn description(&self) -> &'static str {
        "Show the initial language for a URL, stored value and <html lang>"
    }

    fn usage(&self) -> &'static str {
        "pick <url> [stored|-] [html-lang]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "pick" | "detect")
    }

    fn execute_sync(&self, args: &[&str]) -> Result<String> {
        let Some(url) = args.first() else {
            return Err(AppError::Validation(format!("usage: {}", self.usage())));
        };
        url::Url::parse(url).map_err(|e| AppError::Validation(format!("{}: {}", url, e)))?;

        let mut storage = MemoryStorage::new();
        if let Some(&stored) = args.get(1).filter(|s| **s != "-") {
            storage = storage.with_item(&self.config.language.storage_key, stored);
        }

        let state = LanguageState::new(
            self.config.language.clone(),
            storage,
            MemoryLocation::new(url),
        );
        let (lang, source) = state.pick_initial(args.get(2).copied());

        Ok(format!(
            "{} ({:?}, dir={})",
            lang,
            source,
            self.config.language.direction(&lang)
        ))
    }

    fn priority(&self) -> u8 {
        60
    }
}
