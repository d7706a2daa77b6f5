use super::command::Command;
use crate::core::prelude::*;
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    name_map: HashMap<String, usize>,
    initialized: bool,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            name_map: HashMap::new(),
            initialized: false,
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        let name = command.name().to_lowercase();
        let index = self.commands.len();

        self.commands.push(Box::new(command));
        self.name_map.insert(name, index);
        self.initialized = false;
        self
    }

    /// Orders commands by priority (highest first) and rebuilds the name index.
    pub fn initialize(&mut self) -> &mut Self {
        if self.initialized {
            return self;
        }

        self.commands
            .sort_by_key(|cmd| std::cmp::Reverse(cmd.priority()));

        self.name_map.clear();
        for (new_idx, cmd) in self.commands.iter().enumerate() {
            self.name_map.insert(cmd.name().to_lowercase(), new_idx);
        }

        self.initialized = true;
        self
    }

    pub fn find_command(&self, input: &str) -> Option<&dyn Command> {
        let input = input.trim().to_lowercase();

        // Exact match
        if let Some(&index) = self.name_map.get(&input) {
            return self.commands.get(index).map(|cmd| cmd.as_ref());
        }

        // Pattern matching
        for cmd in &self.commands {
            if cmd.is_available() && cmd.matches(&input) {
                return Some(cmd.as_ref());
            }
        }

        None
    }

    pub fn execute_sync(&self, command: &str, args: &[&str]) -> Option<Result<String>> {
        self.find_command(command).map(|cmd| cmd.execute_sync(args))
    }

    pub async fn execute_async(&self, command: &str, args: &[&str]) -> Option<Result<String>> {
        match self.find_command(command) {
            Some(cmd) => Some(cmd.execute(args).await),
            None => None,
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str, &str)> {
        self.commands
            .iter()
            .filter(|cmd| cmd.is_available())
            .map(|cmd| (cmd.name(), cmd.usage(), cmd.description()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_orders_by_priority_and_finds_aliases() {
        let registry = crate::create_default_registry(Config::default());
        let names: Vec<&str> = registry
            .list_commands()
            .into_iter()
            .map(|(name, _, _)| name)
            .collect();

        assert_eq!(names.first(), Some(&"help"));
        assert_eq!(names.len(), 7);
        assert_eq!(registry.find_command("ver").map(|c| c.name()), Some("version"));
        assert_eq!(registry.find_command("LANGUAGE").map(|c| c.name()), Some("langs"));
        assert!(registry.find_command("cleanup").is_none());
    }
}
