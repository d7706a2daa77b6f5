// src/commands/handler.rs
use super::registry::CommandRegistry;

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
}

impl CommandResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn handle_input(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return CommandResult::failed(String::new());
        }

        log::debug!("Processing command: '{}'", input);
        Self::into_result(input, self.registry.execute_sync(parts[0], &parts[1..]))
    }

    pub async fn handle_input_async(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return CommandResult::failed(String::new());
        }

        log::debug!("Processing command: '{}'", input);
        Self::into_result(
            input,
            self.registry.execute_async(parts[0], &parts[1..]).await,
        )
    }

    fn into_result(input: &str, outcome: Option<crate::Result<String>>) -> CommandResult {
        match outcome {
            Some(Ok(message)) => {
                log::debug!("Command returned {} chars", message.chars().count());
                CommandResult {
                    message,
                    success: true,
                }
            }
            Some(Err(e)) => {
                log::debug!("Command error: {}", e);
                CommandResult::failed(e.to_string())
            }
            None => {
                log::debug!("Unknown command: {}", input);
                CommandResult::failed(format!(
                    "Unknown command: '{}'. Try 'help'.",
                    input.split_whitespace().next().unwrap_or(input)
                ))
            }
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str, &str)> {
        self.registry.list_commands()
    }
}
