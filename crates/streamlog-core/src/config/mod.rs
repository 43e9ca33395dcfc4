//! Logger configuration

mod file;
mod settings;

pub use file::{ConfigError, ConfigResult};
pub use settings::{
    LoggerConfig, DEFAULT_LOG_FORMAT, DEFAULT_LOG_SEPARATOR, DEFAULT_TIMESTAMP_FORMAT,
};
