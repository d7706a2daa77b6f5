// src/commands/init/command.rs
use crate::commands::command::Command;
use crate::core::prelude::*;

/// Writes a default `site-i18n.toml` unless one exists.
#[derive(Debug)]
pub struct InitCommand;

#[async_trait::async_trait(?Send)]
impl Command for InitCommand {
    fn name(&self) -> &'static str {
        "init"
    }

    fn description(&self) -> &'static str {
        "Create a default config file"
    }

    fn usage(&self) -> &'static str {
        "init [dir]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "init")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        let dir = std::path::PathBuf::from(args.first().copied().unwrap_or("."));
        let (path, created) = crate::setup::setup_toml::ensure_config_exists(&dir).await?;

        Ok(if created {
            format!("Created {}", path.display())
        } else {
            format!("Config already exists: {}", path.display())
        })
    }

    fn priority(&self) -> u8 {
        30
    }
}
