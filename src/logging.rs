//! Structured logging for the TCP load harness
//!
//! The logger is an injected capability scoped to one harness run: the
//! scheduler and sinks receive a handle rather than writing through
//! process-wide state, so embedders can silence or redirect output.

use crate::models::Config;
use chrono::Utc;
use std::io::{self, Write};
use std::sync::Arc;
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general harness information
    Info = 1,
    /// Warning level - failed probes and other recoverable situations
    Warn = 2,
    /// Error level - error events but the harness can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

/// Shared handle to a [`Logger`]
pub type LoggerHandle = Arc<Logger>;

/// Console logger with level filtering and optional color
pub struct Logger {
    /// Logger name/component
    name: String,
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Correlation ID for this harness run
    session_id: Uuid,
}

impl Logger {
    /// Create a new logger with the given component name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::Info,
            use_color: true,
            session_id: Uuid::new_v4(),
        }
    }

    /// Create a logger configured from the harness configuration
    pub fn with_config(name: impl Into<String>, config: &Config) -> Self {
        let min_level = if config.debug {
            LogLevel::Debug
        } else if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };

        Self {
            name: name.into(),
            min_level,
            use_color: config.enable_color,
            session_id: Uuid::new_v4(),
        }
    }

    /// Set minimum log level
    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Enable or disable colored output
    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Get the session correlation ID for this run
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Check whether a level would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let line = if self.use_color {
            format!(
                "{} {}{:5}{} [{}] {}",
                timestamp,
                level.color_code(),
                level.as_str(),
                LogLevel::reset_code(),
                self.name,
                message
            )
        } else {
            format!(
                "{} {:5} [{}] {}",
                timestamp,
                level.as_str(),
                self.name,
                message
            )
        };

        // Log lines go to stderr so event output on stdout stays parseable
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
