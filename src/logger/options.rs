// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_SOURCE_FIELD_NAME;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Backend a [`Logger`](crate::logger::Logger) delegates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines from the `fmt` subscriber
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Forward to the application's `tracing` subscriber
    Tracing,
}

/// How a [`Logger`](crate::logger::Logger) is assembled.
///
/// `writer` and `level` only apply to the `Text` and `Json` formats; with
/// `Tracing` the installed subscriber decides both.
#[derive(Clone)]
pub struct LoggerOptions {
    pub format: LogFormat,
    pub writer: Arc<BoxMakeWriter>,
    pub level: LevelFilter,
    pub add_source: bool,
    pub source_field_name: String,
}

impl LoggerOptions {
    pub fn new<W>(
        format: LogFormat,
        writer: W,
        level: LevelFilter,
        add_source: bool,
        source_field_name: impl Into<String>,
    ) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            format,
            writer: Arc::new(BoxMakeWriter::new(writer)),
            level,
            add_source,
            source_field_name: source_field_name.into(),
        }
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new(
            LogFormat::Text,
            std::io::stdout,
            LevelFilter::INFO,
            false,
            DEFAULT_SOURCE_FIELD_NAME,
        )
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("format", &self.format)
            .field("writer", &self.writer)
            .field("level", &self.level)
            .field("add_source", &self.add_source)
            .field("source_field_name", &self.source_field_name)
            .finish()
    }
}
