// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the logger wrapper's own failures.

use crate::errors::LogError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Level;

/// A handler failed to emit a record on behalf of a level shortcut.
///
/// # Log Level
/// `warn!` - The record was lost
///
/// # Example
/// ```
/// use dashkit::errors::LogError;
/// use dashkit::observability::messages::logger::HandlerFailed;
///
/// let error = LogError::Io(std::io::Error::other("disk full"));
/// let msg = HandlerFailed {
///     level: tracing::Level::INFO,
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct HandlerFailed<'a> {
    pub level: Level,
    pub error: &'a LogError,
}

impl Display for HandlerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dropped {} log record: {}", self.level, self.error)
    }
}

impl StructuredLog for HandlerFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            record_level = %self.level,
            error = %self.error,
            "{}", self
        );
    }
}
