// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LOG_LEVEL, DEFAULT_SOURCE_FIELD_NAME};
use crate::errors::ConfigError;
use crate::logger::{LogFormat, LoggerOptions};
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

/// Logger configuration as it appears on disk.
///
/// Every field is optional; omitted fields take the values in
/// [`consts`](crate::config::consts).
///
/// # Example
/// ```yaml
/// format: json
/// level: debug
/// add_source: true
/// source_field_name: caller
/// output: stderr
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub format: LogFormat,
    pub level: String,
    pub add_source: bool,
    pub source_field_name: String,
    pub output: LogOutput,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: DEFAULT_LOG_LEVEL.to_string(),
            add_source: false,
            source_field_name: DEFAULT_SOURCE_FIELD_NAME.to_string(),
            output: LogOutput::default(),
        }
    }
}

/// Stream the text and JSON formats write to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
}

/// On-disk syntax of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the syntax from a file extension (`yaml`, `yml`, `toml`, `json`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl LoggerConfig {
    /// Parse the configured level (`trace`..`error` or `off`).
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()))
    }

    /// Validate the config and turn it into options for
    /// [`Logger::new`](crate::logger::Logger::new).
    pub fn into_options(self) -> Result<LoggerOptions, ConfigError> {
        let level = self.level_filter()?;
        let opts = match self.output {
            LogOutput::Stdout => LoggerOptions::new(
                self.format,
                std::io::stdout,
                level,
                self.add_source,
                self.source_field_name,
            ),
            LogOutput::Stderr => LoggerOptions::new(
                self.format,
                std::io::stderr,
                level,
                self.add_source,
                self.source_field_name,
            ),
        };
        Ok(opts)
    }
}

/// Parse logger configuration from a string in the given syntax.
pub fn parse_logger_config(contents: &str, format: ConfigFormat) -> Result<LoggerConfig, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        ConfigFormat::Toml => toml::from_str(contents)?,
        ConfigFormat::Json => crate::jsonkit::unmarshal(contents.as_bytes())?,
    };
    Ok(cfg)
}

/// Load logger configuration from a file, choosing the syntax by extension.
pub fn load_logger_config<P: AsRef<Path>>(path: P) -> Result<LoggerConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg = parse_logger_config(&contents, format)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
    }
    .log();

    Ok(cfg)
}
