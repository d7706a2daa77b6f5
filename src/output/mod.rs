// src/output/mod.rs
pub mod logging;

pub use logging::{AppLogger, LogMessage};
