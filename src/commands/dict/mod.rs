pub mod command;
pub use command::DictCommand;
