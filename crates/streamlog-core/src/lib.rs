//! Streamlog Core
//!
//! Per-stream file logging with level filtering, format-string rendering
//! and call-site attribution. Each call names a stream; entries append to
//! `{output_dir}{stream}.log`, one file per stream, created on first
//! write.
//!
//! ```no_run
//! use streamlog_core::{Logger, LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::new("/var/log/app/")
//!     .with_log_level(LogLevel::Info);
//! let logger = Logger::new(config);
//!
//! logger.log("requests", LogLevel::Warn, "cache miss storm");
//! ```
//!
//! A logger holds one configuration for its lifetime. Pass the logger (or
//! an `Arc` of it) into the components that need it rather than parking
//! it in ambient global state; `log` never panics and never returns an
//! error, so call sites stay unconditional.

mod caller;
pub mod config;
pub mod context;
pub mod error;
mod logger;
pub mod types;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigResult, LoggerConfig, DEFAULT_LOG_FORMAT, DEFAULT_LOG_SEPARATOR,
    DEFAULT_TIMESTAMP_FORMAT,
};
pub use context::{NoRequestContext, RequestContext, SharedContext, StaticRequestContext};
pub use error::{ConsoleSink, ErrorSink, LogError, SharedSink, SilentSink};
pub use logger::Logger;
pub use types::{CallerFrame, LogLevel, ParseLevelError};
