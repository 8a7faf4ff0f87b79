// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Logger configuration was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dashkit::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "config/logger.toml",
///     format: "toml",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loaded {} logger config from '{}'", self.format, self.path)
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, format = self.format, "{}", self);
    }
}
