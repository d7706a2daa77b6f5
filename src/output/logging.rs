// src/output/logging.rs
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Metadata, Record};
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub enum LoggingError {
    LockError(String),
    SetLoggerError(log::SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::LockError(msg) => write!(f, "{}", msg),
            LoggingError::SetLoggerError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<log::SetLoggerError> for LoggingError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggingError::SetLoggerError(err)
    }
}

impl<T> From<PoisonError<T>> for LoggingError {
    fn from(_: PoisonError<T>) -> Self {
        LoggingError::LockError("log buffer mutex poisoned".into())
    }
}

lazy_static! {
    static ref LOG_MESSAGES: Mutex<Vec<LogMessage>> = Mutex::new(Vec::new());
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogMessage {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: Level, target: &str, message: String) -> Self {
        Self {
            level,
            target: target.to_string(),
            message,
        }
    }

    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.level, self.message)
    }
}

/// Buffers records in memory. In the browser each record is also written to
/// the console.
pub struct AppLogger {
    level: Level,
}

impl AppLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Drains everything buffered so far.
    pub fn get_messages() -> Result<Vec<LogMessage>, LoggingError> {
        let mut messages = LOG_MESSAGES.lock().map_err(LoggingError::from)?;
        Ok(messages.drain(..).collect())
    }

    fn add_message(message: LogMessage) -> Result<(), LoggingError> {
        let mut messages = LOG_MESSAGES.lock().map_err(LoggingError::from)?;
        messages.push(message);
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn forward(message: &LogMessage) {
        let text = wasm_bindgen::JsValue::from_str(&message.formatted());
        match message.level {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            _ => web_sys::console::log_1(&text),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn forward(_message: &LogMessage) {}
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message =
                LogMessage::new(record.level(), record.target(), record.args().to_string());
            Self::forward(&message);
            if let Err(e) = Self::add_message(message) {
                eprintln!("Logging error: {}", e);
            }
        }
    }

    fn flush(&self) {}
}

/// Level named in the config (`"debug"`, `"WARN"`, `"off"`), or `Info` when
/// the name is not recognised.
pub fn level_filter(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Installs [`AppLogger`] as the global logger.
pub fn init(level: LevelFilter) -> Result<(), LoggingError> {
    let logger = Box::new(AppLogger::new(level.to_level().unwrap_or(Level::Error)));
    log::set_boxed_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_reads_config_names() {
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter(" WARN "), LevelFilter::Warn);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("loud"), LevelFilter::Info);
        assert_eq!(level_filter(""), LevelFilter::Info);
    }

    #[test]
    fn messages_are_drained_once() {
        AppLogger::add_message(LogMessage::new(Level::Warn, "t", "first".into())).unwrap();
        let messages = AppLogger::get_messages().unwrap();
        assert!(messages.iter().any(|m| m.message == "first"));
        assert!(!AppLogger::get_messages()
            .unwrap()
            .iter()
            .any(|m| m.message == "first"));
    }
}
