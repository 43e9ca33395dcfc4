//! Command-line front end for streamlog
//!
//! Builds a configuration from flags (optionally seeded from a YAML
//! file), constructs a logger and appends one entry. Useful for smoke
//! testing a deployment's logging directory and format without an
//! application in the loop.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use streamlog_core::{ConsoleSink, LogLevel, Logger, LoggerConfig};

/// Append one entry to a stream log
#[derive(Parser)]
#[command(name = "streamlog", version, about)]
struct Cli {
    /// Prefix for log files, e.g. "./logs/"
    #[arg(long)]
    output_dir: Option<String>,

    /// Seed the configuration from a YAML file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stream to append to
    #[arg(long, default_value = "app")]
    stream: String,

    /// Severity of the entry
    #[arg(long, default_value = "error")]
    level: LogLevel,

    /// Echo the line to stdout as well
    #[arg(long)]
    console: bool,

    /// Field codes to render, e.g. "tsm"
    #[arg(long)]
    log_format: Option<String>,

    /// Separator between rendered fields
    #[arg(long)]
    separator: Option<String>,

    /// chrono pattern for the timestamp field
    #[arg(long)]
    timestamp_format: Option<String>,

    /// Message text
    message: String,
}

impl Cli {
    fn build_config(&self) -> Result<LoggerConfig, String> {
        let mut config = match (&self.config, &self.output_dir) {
            (Some(path), _) => LoggerConfig::from_yaml_file(path)
                .map_err(|e| format!("{}: {e}", path.display()))?,
            (None, Some(dir)) => LoggerConfig::new(dir.clone()),
            (None, None) => return Err("either --config or --output-dir is required".to_string()),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = format.clone();
        }
        if let Some(separator) = &self.separator {
            config.log_separator = separator.clone();
        }
        if let Some(format) = &self.timestamp_format {
            config.timestamp_format = format.clone();
        }
        if self.console {
            config.show_on_console = true;
        }
        // The tool always writes the entry it was asked to emit
        config.log_level = LogLevel::Trace;

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.build_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("streamlog: {e}");
            return ExitCode::from(2);
        }
    };

    // Fire-and-forget: a failed write still exits 0, but the stderr sink
    // makes it visible to the operator
    let logger = Logger::new(config).with_error_sink(Arc::new(ConsoleSink::new()));
    logger.log(&cli.stream, cli.level, &cli.message);

    ExitCode::SUCCESS
}
