pub mod command;
pub use command::VersionCommand;
