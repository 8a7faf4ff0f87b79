// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logger that injects context-carried attributes and the
//! caller's `file:line` into every record.
//!
//! Formatting, output and level filtering belong to the backend
//! [`Handler`] (text or JSON lines, or the application's `tracing`
//! subscriber). The [`ContextHandler`] sits in front of it and enriches
//! records first.
//!
//! # Usage
//!
//! ```rust
//! use dashkit::logger::{Attr, LogContext, LogFormat, Logger, LoggerOptions};
//! use tracing_subscriber::filter::LevelFilter;
//!
//! let opts = LoggerOptions::new(LogFormat::Json, std::io::stderr, LevelFilter::INFO, true, "");
//! let logger = Logger::new(opts, None);
//!
//! let ctx = logger.with_value(&LogContext::new(), [Attr::new("request_id", "r-42")]);
//! logger.info(&ctx, "profile saved");
//! ```

mod attr;
mod context;
mod facade;
mod format;
mod handler;
mod options;
mod record;
mod tracing_bridge;

#[cfg(test)]
pub(crate) mod test_support;

pub use attr::{Attr, AttrValue};
pub use context::LogContext;
pub use facade::{Logger, WrapHandler};
pub use format::FormatHandler;
pub use handler::{ContextHandler, Handler};
pub use options::{LogFormat, LoggerOptions};
pub use record::Record;
pub use tracing_bridge::TracingHandler;
