//! Log-time error taxonomy and the optional observation hook

use std::sync::Arc;

use thiserror::Error;

/// Failures that can occur while rendering or writing a log entry
///
/// `Logger::log` never surfaces these to the caller; they go to the
/// configured [`ErrorSink`] and are otherwise dropped. A missing log line
/// is the only symptom a caller ever sees.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The line could not be appended
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configured timestamp pattern could not be rendered
    #[error("invalid timestamp format {format:?}")]
    Timestamp { format: String },
}

/// Observer for errors that `log` swallows
///
/// Implementations:
/// - `SilentSink`: discard everything (the default contract)
/// - `ConsoleSink`: report to stderr
pub trait ErrorSink: Send + Sync {
    /// Called once per failure, with the stream the entry was bound for
    fn on_error(&self, stream: &str, error: &LogError);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn ErrorSink>;

/// Sink that discards every error
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl SilentSink {
    /// Create a new silent sink
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for SilentSink {
    fn on_error(&self, _stream: &str, _error: &LogError) {}
}

/// Sink that reports to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new stderr sink
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for ConsoleSink {
    fn on_error(&self, stream: &str, error: &LogError) {
        eprintln!("streamlog[{stream}]: {error}");
    }
}
