// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for JSON decoding and HTTP binding events.

use crate::errors::JsonError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A payload was rejected by the strict decoder.
///
/// # Log Level
/// `debug!` - Rejections are returned to the caller, this is diagnostic only
///
/// # Example
/// ```
/// use dashkit::errors::JsonError;
/// use dashkit::observability::messages::json::DecodeRejected;
///
/// let error = JsonError::UnknownField("extra".to_string());
/// let msg = DecodeRejected {
///     target: "app::User",
///     error: &error,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DecodeRejected<'a> {
    pub target: &'a str,
    pub error: &'a JsonError,
}

impl Display for DecodeRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected json payload for '{}': {}", self.target, self.error)
    }
}

impl StructuredLog for DecodeRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            target_type = self.target,
            error = %self.error,
            "{}", self
        );
    }
}

/// A request body is about to be buffered and decoded into `target`.
///
/// # Log Level
/// `trace!` - Per-request detail. The span covers buffering and decoding.
///
/// # Example
/// ```
/// use dashkit::observability::messages::json::BindingRequestBody;
/// use dashkit::observability::messages::StructuredLog;
///
/// let msg = BindingRequestBody { target: "app::User" };
/// let span = msg.span("bind_request_body");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct BindingRequestBody<'a> {
    pub target: &'a str,
}

impl Display for BindingRequestBody<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Binding request body to '{}'", self.target)
    }
}

impl StructuredLog for BindingRequestBody<'_> {
    fn log(&self) {
        tracing::trace!(target_type = self.target, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("bind_request_body", span_name = name, target_type = self.target)
    }
}

/// The request body was buffered and put back on the request.
///
/// # Log Level
/// `trace!` - Per-request detail
pub struct RequestBodyRestored {
    pub bytes: usize,
}

impl Display for RequestBodyRestored {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Buffered and restored request body: {} bytes", self.bytes)
    }
}

impl StructuredLog for RequestBodyRestored {
    fn log(&self) {
        tracing::trace!(bytes = self.bytes, "{}", self);
    }
}

/// A JSON response was assembled.
///
/// # Log Level
/// `trace!` - Per-request detail
pub struct ResponseEncoded {
    pub status: u16,
    pub bytes: usize,
}

impl Display for ResponseEncoded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Encoded json response: status={}, body={} bytes",
            self.status, self.bytes
        )
    }
}

impl StructuredLog for ResponseEncoded {
    fn log(&self) {
        tracing::trace!(status = self.status, bytes = self.bytes, "{}", self);
    }
}
