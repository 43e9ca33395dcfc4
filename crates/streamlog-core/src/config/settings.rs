//! Logger configuration value object

use serde::{Deserialize, Serialize};

use crate::types::LogLevel;

/// Default field codes: timestamp, severity, name, line, file, client
/// address, session, message
pub const DEFAULT_LOG_FORMAT: &str = "tsnlfiem";

/// Default field separator
pub const DEFAULT_LOG_SEPARATOR: &str = "|";

/// Default timestamp pattern (local time)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Configuration consumed by a [`Logger`](crate::Logger) at construction
///
/// Plain data: nothing is validated here. An unwritable `output_dir` or a
/// malformed `log_format`/`timestamp_format` only surfaces when a call to
/// `log` tries to render and write.
///
/// # Example
///
/// ```
/// use streamlog_core::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new("/var/log/app/")
///     .with_log_level(LogLevel::Warn)
///     .with_console(true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Prefix for output files. The log path is `{output_dir}{stream}.log`
    /// by plain concatenation, so a directory prefix must carry its
    /// trailing separator ("/var/log/app/").
    pub output_dir: String,

    /// Threshold; entries below it are dropped
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Echo every written line to stdout
    #[serde(default)]
    pub show_on_console: bool,

    /// One-letter field codes rendered in order; unrecognized codes are
    /// skipped
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Separator inserted between rendered fields
    #[serde(default = "default_log_separator")]
    pub log_separator: String,

    /// chrono strftime pattern for the `t` field, rendered in local time
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_log_level() -> LogLevel {
    LogLevel::Error
}

fn default_log_format() -> String {
    DEFAULT_LOG_FORMAT.to_string()
}

fn default_log_separator() -> String {
    DEFAULT_LOG_SEPARATOR.to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl LoggerConfig {
    /// Create a configuration with the documented defaults
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            log_level: default_log_level(),
            show_on_console: false,
            log_format: default_log_format(),
            log_separator: default_log_separator(),
            timestamp_format: default_timestamp_format(),
        }
    }

    /// Set the level threshold
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Enable or disable the stdout echo
    pub fn with_console(mut self, show: bool) -> Self {
        self.show_on_console = show;
        self
    }

    /// Set the field codes
    pub fn with_log_format(mut self, format: impl Into<String>) -> Self {
        self.log_format = format.into();
        self
    }

    /// Set the field separator
    pub fn with_log_separator(mut self, separator: impl Into<String>) -> Self {
        self.log_separator = separator.into();
        self
    }

    /// Set the timestamp pattern
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}
