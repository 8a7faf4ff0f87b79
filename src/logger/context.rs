// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::logger::Attr;
use std::sync::Arc;

/// Request- or operation-scoped attributes threaded through call chains.
///
/// A context is immutable. [`with_attrs`](LogContext::with_attrs) derives a
/// new context holding the parent's attributes followed by the new ones;
/// the parent is left as it was, so one parent can safely be shared by
/// concurrent operations.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    attrs: Arc<Vec<Attr>>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attrs<I>(&self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Attr>,
    {
        let mut merged = Vec::clone(&self.attrs);
        merged.extend(attrs);
        Self {
            attrs: Arc::new(merged),
        }
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
