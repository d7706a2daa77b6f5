use crate::commands::command::Command;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands"
    }

    fn matches(&self, command: &str) -> bool {
        let cmd = command.trim().to_lowercase();
        cmd == "help" || cmd == "?" || cmd == "--help" || cmd == "-h"
    }

    fn execute_sync(&self, args: &[&str]) -> Result<String> {
        let registry = crate::create_default_registry(Config::default());
        let commands = registry.list_commands();

        if let Some(&name) = args.first() {
            return match registry.find_command(name) {
                Some(cmd) => Ok(format!("{}\n  {}", cmd.usage(), cmd.description())),
                None => Err(AppError::Validation(format!("No such command: {}", name))),
            };
        }

        let width = commands
            .iter()
            .map(|(_, usage, _)| usage.chars().count())
            .max()
            .unwrap_or(0);

        let mut result = String::from("Usage: site-i18n <command> [args]\n\n");
        for (_, usage, description) in commands {
            result.push_str(&format!("  {:<width$}  {}\n", usage, description, width = width));
        }
        Ok(result.trim_end().to_string())
    }

    fn priority(&self) -> u8 {
        95
    }
}
