// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::logger::Attr;
use chrono::{DateTime, Utc};
use std::panic::Location;
use tracing::Level;

/// A single leveled, timestamped log message with its attributes.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
    /// Call site that produced the record.
    pub location: &'static Location<'static>,
}

impl Record {
    /// Create a record stamped with the current time and the caller's
    /// location.
    #[track_caller]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            location: Location::caller(),
        }
    }

    pub fn add_attrs<I>(&mut self, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
    {
        self.attrs.extend(attrs);
    }

    /// `file:line` of the call site.
    pub fn source(&self) -> String {
        format!("{}:{}", self.location.file(), self.location.line())
    }
}
