// src/commands/mod.rs
pub mod command;
pub mod dict;
pub mod get;
pub mod handler;
pub mod help;
pub mod init;
pub mod lang;
pub mod pick;
pub mod registry;
pub mod site;
pub mod version;

pub use command::Command;
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
