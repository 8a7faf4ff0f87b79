// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for stack-traced error wrapping.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A fresh call stack was captured for an error chain.
///
/// # Log Level
/// `trace!` - Fires on every first wrap
pub struct StackCaptured {
    pub lines: usize,
}

impl Display for StackCaptured {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Captured stack trace: {} lines after filtering", self.lines)
    }
}

impl StructuredLog for StackCaptured {
    fn log(&self) {
        tracing::trace!(lines = self.lines, "{}", self);
    }
}

/// An error chain already carried a stack, so it was reused.
pub struct StackReused;

impl Display for StackReused {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reusing stack trace already captured in the error chain")
    }
}

impl StructuredLog for StackReused {
    fn log(&self) {
        tracing::trace!("{}", self);
    }
}
