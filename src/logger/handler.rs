// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_SOURCE_FIELD_NAME;
use crate::errors::LogError;
use crate::logger::{Attr, LogContext, Record};
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// Final destination of log records.
///
/// Handlers decide formatting, output and level filtering. They can be
/// stacked: a middleware handler owns another handler and delegates to it.
pub trait Handler: Send + Sync {
    fn enabled(&self, level: Level) -> bool;

    fn handle(&self, ctx: &LogContext, record: Record) -> Result<(), LogError>;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn handle(&self, ctx: &LogContext, record: Record) -> Result<(), LogError> {
        (**self).handle(ctx, record)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn handle(&self, ctx: &LogContext, record: Record) -> Result<(), LogError> {
        (**self).handle(ctx, record)
    }
}

/// Injects context attributes and the call site into every record before
/// delegating to the wrapped handler.
pub struct ContextHandler {
    inner: Box<dyn Handler>,
    add_source: bool,
    source_field_name: String,
}

impl ContextHandler {
    /// An empty `source_field_name` falls back to `"source"`.
    pub fn new(inner: Box<dyn Handler>, add_source: bool, source_field_name: impl Into<String>) -> Self {
        let mut source_field_name = source_field_name.into();
        if source_field_name.is_empty() {
            source_field_name = DEFAULT_SOURCE_FIELD_NAME.to_string();
        }

        Self {
            inner,
            add_source,
            source_field_name,
        }
    }

    pub fn add_source(&self) -> bool {
        self.add_source
    }

    pub fn source_field_name(&self) -> &str {
        &self.source_field_name
    }

    pub fn with_value<I>(&self, parent: &LogContext, attrs: I) -> LogContext
    where
        I: IntoIterator<Item = Attr>,
    {
        parent.with_attrs(attrs)
    }
}

impl Handler for ContextHandler {
    fn enabled(&self, level: Level) -> bool {
        self.inner.enabled(level)
    }

    fn handle(&self, ctx: &LogContext, mut record: Record) -> Result<(), LogError> {
        record.add_attrs(ctx.attrs().iter().cloned());

        if self.add_source {
            let source = record.source();
            record.add_attrs([Attr::new(self.source_field_name.as_str(), source)]);
        }

        self.inner.handle(ctx, record)
    }
}

impl fmt::Debug for ContextHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextHandler")
            .field("add_source", &self.add_source)
            .field("source_field_name", &self.source_field_name)
            .finish_non_exhaustive()
    }
}
