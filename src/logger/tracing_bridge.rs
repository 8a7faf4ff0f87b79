// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::LogError;
use crate::logger::attr::AttrsJson;
use crate::logger::{Handler, LogContext, Record};
use tracing::Level;

/// Forwards records to the current `tracing` dispatcher.
///
/// Filtering and formatting are left to the subscriber. Record attributes
/// travel in a single `attrs` field holding a JSON object, so every key
/// and value survives any formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHandler;

impl Handler for TracingHandler {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::ERROR => tracing::enabled!(target: "dashkit::logger", Level::ERROR),
            Level::WARN => tracing::enabled!(target: "dashkit::logger", Level::WARN),
            Level::INFO => tracing::enabled!(target: "dashkit::logger", Level::INFO),
            Level::DEBUG => tracing::enabled!(target: "dashkit::logger", Level::DEBUG),
            _ => tracing::enabled!(target: "dashkit::logger", Level::TRACE),
        }
    }

    fn handle(&self, _ctx: &LogContext, record: Record) -> Result<(), LogError> {
        let attrs = serde_json::to_string(&AttrsJson(&record.attrs))?;
        let message = record.message.as_str();

        match record.level {
            Level::ERROR => tracing::error!(target: "dashkit::logger", attrs = %attrs, "{}", message),
            Level::WARN => tracing::warn!(target: "dashkit::logger", attrs = %attrs, "{}", message),
            Level::INFO => tracing::info!(target: "dashkit::logger", attrs = %attrs, "{}", message),
            Level::DEBUG => tracing::debug!(target: "dashkit::logger", attrs = %attrs, "{}", message),
            _ => tracing::trace!(target: "dashkit::logger", attrs = %attrs, "{}", message),
        }

        Ok(())
    }
}
