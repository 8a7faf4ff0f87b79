// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BoxError;
use crate::xerrors::{new, wrap, StackTraceError};
use std::fmt::Display;

/// Stack-trace the error side of a `Result` in place.
///
/// ```rust
/// use dashkit::xerrors::ResultExt;
///
/// fn read_config() -> Result<String, dashkit::xerrors::StackTraceError> {
///     std::fs::read_to_string("/definitely/missing.yaml").wrap_err("reading config")
/// }
///
/// assert!(read_config().unwrap_err().to_string().ends_with("; reading config"));
/// ```
pub trait ResultExt<T> {
    fn stack_trace(self) -> Result<T, StackTraceError>;

    fn wrap_err<M: Display>(self, msg: M) -> Result<T, StackTraceError>;

    /// Like [`wrap_err`](ResultExt::wrap_err), building the message only on error.
    fn wrap_err_with<M: Display, F: FnOnce() -> M>(self, msg: F) -> Result<T, StackTraceError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn stack_trace(self) -> Result<T, StackTraceError> {
        self.map_err(|err| new(err))
    }

    fn wrap_err<M: Display>(self, msg: M) -> Result<T, StackTraceError> {
        self.map_err(|err| wrap(err, msg))
    }

    fn wrap_err_with<M: Display, F: FnOnce() -> M>(self, msg: F) -> Result<T, StackTraceError> {
        self.map_err(|err| wrap(err, msg()))
    }
}
