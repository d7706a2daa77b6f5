pub mod command;
pub use command::PickCommand;
