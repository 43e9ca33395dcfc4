//! The per-stream file logger

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

use chrono::Local;

use crate::caller;
use crate::config::LoggerConfig;
use crate::context::{NoRequestContext, RequestContext};
use crate::error::{ErrorSink, LogError, SilentSink};
use crate::types::{CallerFrame, LogLevel};

/// Frames inside the `Logger` impl are never attributed as the caller
const LOGGER_FRAMES: &str = concat!(module_path!(), "::Logger");

/// Per-stream file logger
///
/// Holds exactly one configuration for its lifetime. [`log`](Logger::log)
/// filters by level, renders the configured format string, appends the
/// line to `{output_dir}{stream}.log` and optionally echoes it to stdout.
/// It never panics and never reports failure to its caller; attach an
/// [`ErrorSink`] to observe swallowed errors.
///
/// # Example
///
/// ```no_run
/// use streamlog_core::{Logger, LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new("/var/log/app/").with_log_level(LogLevel::Info);
/// let logger = Logger::new(config);
/// logger.log("requests", LogLevel::Warn, "cache miss storm");
/// ```
pub struct Logger {
    config: LoggerConfig,
    context: Arc<dyn RequestContext>,
    sink: Arc<dyn ErrorSink>,
}

impl Logger {
    /// Create a logger over the given configuration
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            context: Arc::new(NoRequestContext),
            sink: Arc::new(SilentSink),
        }
    }

    /// Attach a request context supplying the `i` and `e` fields
    pub fn with_context(mut self, context: Arc<dyn RequestContext>) -> Self {
        self.context = context;
        self
    }

    /// Attach an observer for errors that `log` would otherwise swallow
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The configuration this logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Append one entry to the `stream_name` log.
    ///
    /// Entries below the configured threshold are dropped without side
    /// effects. Recognized format codes: `t` timestamp, `s` numeric level,
    /// `n` caller name, `l` caller line, `f` caller file, `i` client
    /// address, `e` session id, `m` message; anything else is skipped.
    /// `stream_name` is used verbatim as the filename stem.
    pub fn log(&self, stream_name: &str, level: LogLevel, message: &str) {
        if level < self.config.log_level {
            return;
        }

        let frame = caller::locate(&[LOGGER_FRAMES]);
        let line = self.render(stream_name, level, &frame, message);

        let path = format!("{}{}.log", self.config.output_dir, stream_name);
        if let Err(error) = append_line(&path, &line) {
            self.sink.on_error(stream_name, &error);
        }
        if self.config.show_on_console {
            println!("{line}");
        }
    }

    fn render(
        &self,
        stream_name: &str,
        level: LogLevel,
        frame: &CallerFrame,
        message: &str,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();
        for code in self.config.log_format.chars() {
            match code {
                't' => parts.push(self.timestamp(stream_name)),
                's' => parts.push(level.value().to_string()),
                // `f` is the file and `n` the name; the inherited format
                // contract fixes this mapping
                'n' => parts.push(frame.name.clone()),
                'l' => parts.push(frame.line.map(|l| l.to_string()).unwrap_or_default()),
                'f' => parts.push(frame.file.clone().unwrap_or_default()),
                'i' => parts.push(self.context.client_addr().unwrap_or_default()),
                'e' => parts.push(self.context.session_id().unwrap_or_default()),
                'm' => parts.push(message.to_string()),
                _ => {}
            }
        }
        parts.join(self.config.log_separator.as_str())
    }

    /// Render the current local time; a malformed pattern yields an empty
    /// field and a sink notification rather than a panic.
    fn timestamp(&self, stream_name: &str) -> String {
        use std::fmt::Write as _;

        let mut rendered = String::new();
        let formatted = Local::now().format(&self.config.timestamp_format);
        if write!(rendered, "{formatted}").is_err() {
            self.sink.on_error(
                stream_name,
                &LogError::Timestamp {
                    format: self.config.timestamp_format.clone(),
                },
            );
            rendered.clear();
        }
        rendered
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("config", &self.config).finish()
    }
}

/// Append `line` plus a newline; the handle is scoped to this call and
/// released even when the write fails.
fn append_line(path: &str, line: &str) -> Result<(), LogError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_string(),
            source,
        })?;
    writeln!(file, "{line}").map_err(|source| LogError::Write {
        path: path.to_string(),
        source,
    })
}
