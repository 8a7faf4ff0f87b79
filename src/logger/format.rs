// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text and JSON handlers backed by a private `tracing_subscriber::fmt`
//! subscriber.

use crate::errors::LogError;
use crate::logger::{Handler, LogContext, Record, TracingHandler};
use std::io;
use std::sync::Arc;
use tracing::{Dispatch, Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Writes one line per record through its own `fmt` subscriber.
///
/// The subscriber is never installed globally. Each record is dispatched to
/// it through [`TracingHandler`], so the level filter and line layout are the
/// subscriber's own.
#[derive(Debug, Clone)]
pub struct FormatHandler {
    dispatch: Dispatch,
}

impl FormatHandler {
    /// `<time>  INFO dashkit::logger: <message> attrs={"key":value,...}`
    pub fn text(writer: Arc<BoxMakeWriter>, level: LevelFilter) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(SharedMakeWriter(writer))
            .with_max_level(level)
            .with_ansi(false)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// `{"timestamp":"...","level":"INFO","message":"...","attrs":"{...}","target":"dashkit::logger"}`
    pub fn json(writer: Arc<BoxMakeWriter>, level: LevelFilter) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(SharedMakeWriter(writer))
            .with_max_level(level)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }
}

impl Handler for FormatHandler {
    fn enabled(&self, level: Level) -> bool {
        tracing::dispatcher::with_default(&self.dispatch, || TracingHandler.enabled(level))
    }

    fn handle(&self, ctx: &LogContext, record: Record) -> Result<(), LogError> {
        tracing::dispatcher::with_default(&self.dispatch, || TracingHandler.handle(ctx, record))
    }
}

/// Lets the subscriber own a clone of the shared writer.
struct SharedMakeWriter(Arc<BoxMakeWriter>);

impl<'a> MakeWriter<'a> for SharedMakeWriter {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        MakeWriter::make_writer(&*self.0)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        MakeWriter::make_writer_for(&*self.0, meta)
    }
}
