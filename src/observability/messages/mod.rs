// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `json` - strict decoding rejections, request/response binding
//! * `errors` - stack capture and reuse in `xerrors`
//! * `config` - logger configuration loading
//! * `logger` - handler failures inside the logger wrapper
//!
//! # Usage Pattern
//!
//! ```rust
//! use dashkit::observability::messages::config::ConfigLoaded;
//!
//! let msg = ConfigLoaded {
//!     path: "logger.yaml",
//!     format: "yaml",
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod config;
pub mod errors;
pub mod json;
pub mod logger;

/// A message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event at its documented level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    ///
    /// Only messages that mark the start of an operation open a real span.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
