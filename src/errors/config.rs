// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::JsonError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating logger configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported format
    #[error("unsupported config format '{0}': expected yaml, yml, toml or json")]
    UnsupportedFormat(String),

    #[error("invalid yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid toml config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid json config: {0}")]
    Json(#[from] JsonError),

    /// The configured level is not one of trace, debug, info, warn, error or off
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
}
