// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while a handler emits a log record
#[derive(Debug, Error)]
pub enum LogError {
    /// Writing the formatted record to its output failed
    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    /// The record attributes could not be encoded as JSON
    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),
}
