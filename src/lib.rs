#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod commands;
pub mod core;
pub mod dom;
pub mod i18n;
pub mod output;
#[cfg(not(target_arch = "wasm32"))]
pub mod setup;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Essential re-exports
pub use app::{I18n, SetLangOptions, UiEvent};
#[cfg(not(target_arch = "wasm32"))]
pub use commands::{Command, CommandHandler, CommandRegistry};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{Dictionary, DictionarySource, Loader};

#[cfg(not(target_arch = "wasm32"))]
pub fn create_default_registry(config: Config) -> CommandRegistry {
    use commands::{
        dict::DictCommand, get::GetCommand, help::HelpCommand, init::InitCommand,
        lang::LanguageCommand, pick::PickCommand, version::VersionCommand,
    };
    use std::sync::Arc;

    let config = Arc::new(config);
    let mut registry = CommandRegistry::new();

    registry.register(LanguageCommand::new(Arc::clone(&config)));
    registry.register(DictCommand::new(Arc::clone(&config)));
    registry.register(GetCommand::new(Arc::clone(&config)));
    registry.register(PickCommand::new(Arc::clone(&config)));
    registry.register(InitCommand);
    registry.register(VersionCommand);
    registry.register(HelpCommand);

    registry.initialize();
    registry
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_handler(config: Config) -> CommandHandler {
    CommandHandler::with_registry(create_default_registry(config))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_config() -> Result<Config> {
    Config::load().await
}
