//! YAML file loading for [`LoggerConfig`]

use std::fs;
use std::path::Path;

use super::settings::LoggerConfig;

/// Errors that can occur while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl LoggerConfig {
    /// Load a configuration from a YAML file
    ///
    /// Absent optional fields take their defaults; `output_dir` is
    /// required.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
