// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::LogError;
use crate::logger::{
    Attr, ContextHandler, FormatHandler, Handler, LogContext, LogFormat, LoggerOptions, Record,
    TracingHandler,
};
use crate::observability::messages::logger::HandlerFailed;
use crate::observability::messages::StructuredLog;
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// Middleware hook applied to the backend handler before context and
/// source injection are layered on top.
pub type WrapHandler = Box<dyn FnOnce(Box<dyn Handler>) -> Box<dyn Handler>>;

/// Structured logger that enriches every record with context attributes
/// and, optionally, the call site.
///
/// Logging methods are `#[track_caller]`, so the recorded source is the
/// line that called the logger, however deep the surrounding helpers are.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<ContextHandler>,
    opts: LoggerOptions,
}

impl Logger {
    pub fn new(opts: LoggerOptions, wrap_handler: Option<WrapHandler>) -> Self {
        let mut handler: Box<dyn Handler> = match opts.format {
            LogFormat::Text => Box::new(FormatHandler::text(Arc::clone(&opts.writer), opts.level)),
            LogFormat::Json => Box::new(FormatHandler::json(Arc::clone(&opts.writer), opts.level)),
            LogFormat::Tracing => Box::new(TracingHandler),
        };

        if let Some(wrap) = wrap_handler {
            handler = wrap(handler);
        }

        let handler = ContextHandler::new(handler, opts.add_source, opts.source_field_name.clone());

        Self {
            handler: Arc::new(handler),
            opts,
        }
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.opts
    }

    pub fn handler(&self) -> &ContextHandler {
        &self.handler
    }

    /// Derive a context carrying `attrs` after the parent's attributes.
    pub fn with_value<I>(&self, parent: &LogContext, attrs: I) -> LogContext
    where
        I: IntoIterator<Item = Attr>,
    {
        self.handler.with_value(parent, attrs)
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Emit a record with per-call attributes, returning handler failures.
    #[track_caller]
    pub fn log<I>(
        &self,
        ctx: &LogContext,
        level: Level,
        message: impl Into<String>,
        attrs: I,
    ) -> Result<(), LogError>
    where
        I: IntoIterator<Item = Attr>,
    {
        if !self.handler.enabled(level) {
            return Ok(());
        }

        let mut record = Record::new(level, message);
        record.add_attrs(attrs);
        self.handler.handle(ctx, record)
    }

    #[track_caller]
    pub fn trace(&self, ctx: &LogContext, message: impl Into<String>) {
        self.emit(ctx, Level::TRACE, message.into());
    }

    #[track_caller]
    pub fn debug(&self, ctx: &LogContext, message: impl Into<String>) {
        self.emit(ctx, Level::DEBUG, message.into());
    }

    #[track_caller]
    pub fn info(&self, ctx: &LogContext, message: impl Into<String>) {
        self.emit(ctx, Level::INFO, message.into());
    }

    #[track_caller]
    pub fn warn(&self, ctx: &LogContext, message: impl Into<String>) {
        self.emit(ctx, Level::WARN, message.into());
    }

    #[track_caller]
    pub fn error(&self, ctx: &LogContext, message: impl Into<String>) {
        self.emit(ctx, Level::ERROR, message.into());
    }

    #[track_caller]
    fn emit(&self, ctx: &LogContext, level: Level, message: String) {
        if let Err(error) = self.log(ctx, level, message, std::iter::empty()) {
            HandlerFailed {
                level,
                error: &error,
            }
            .log();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler)
            .field("opts", &self.opts)
            .finish()
    }
}
