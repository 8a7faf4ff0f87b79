// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BoxError;
use crate::xerrors::stack_trace::{find_stack_trace, StackTraceError};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// An error whose message extends the one it wraps.
#[derive(Debug, Error)]
#[error("{message}")]
struct WrappedError {
    message: String,
    source: BoxError,
}

/// Elevate `err` to a stack-traced error.
///
/// If anything in `err`'s chain already carries a stack, that stack is
/// reused; otherwise the current call stack is captured and filtered.
pub fn new(err: impl Into<BoxError>) -> StackTraceError {
    StackTraceError::capture(err.into())
}

/// Extend `err`'s message with `msg` (`"<err>; <msg>"`) and elevate the
/// result like [`new`]. The original error stays reachable through
/// `source()`.
pub fn wrap(err: impl Into<BoxError>, msg: impl fmt::Display) -> StackTraceError {
    let err = err.into();
    let message = format!("{err}; {msg}");
    StackTraceError::capture(Box::new(WrappedError {
        message,
        source: err,
    }))
}

/// [`wrap`] with a preformatted message. The [`wrapf!`](crate::wrapf)
/// macro builds the arguments in place.
pub fn wrapf(err: impl Into<BoxError>, args: fmt::Arguments<'_>) -> StackTraceError {
    wrap(err, args)
}

/// Render `err` with its stack when its chain holds a stack-traced error,
/// or just its message otherwise.
pub fn get_error_with_stack(err: &(dyn Error + 'static)) -> String {
    match find_stack_trace(err) {
        Some(st) => st.error_with_stack(),
        None => err.to_string(),
    }
}

/// Wrap an error with a formatted message, capturing or reusing its stack.
///
/// ```rust
/// let err = dashkit::wrapf!(std::io::Error::other("timeout"), "fetching {}", "/users");
/// assert_eq!(err.to_string(), "timeout; fetching /users");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)+) => {
        $crate::xerrors::wrapf($err, ::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn stack_part(rendered: &str) -> &str {
        rendered
            .split_once("\nStackTrace: ")
            .map(|(_, stack)| stack)
            .expect("rendering should contain a stack")
    }

    #[test]
    fn new_keeps_message() {
        let err = new(io::Error::other("boom"));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn new_accepts_string_errors() {
        let err = new("plain message");
        assert_eq!(err.to_string(), "plain message");
    }

    #[test]
    fn wrap_joins_messages() {
        let err = wrap(io::Error::other("boom"), "while saving");
        assert_eq!(err.to_string(), "boom; while saving");
    }

    #[test]
    fn wrap_keeps_original_in_chain() {
        let err = wrap(io::Error::other("boom"), "while saving");

        let original = std::iter::successors(Some(&err as &(dyn Error + 'static)), |&e| e.source())
            .find_map(|e| e.downcast_ref::<io::Error>());
        assert_eq!(original.map(|e| e.to_string()), Some("boom".to_string()));
    }

    #[test]
    fn wrapf_formats_message() {
        let err = crate::wrapf!(io::Error::other("boom"), "user {} attempt {}", "ann", 3);
        assert_eq!(err.to_string(), "boom; user ann attempt 3");

        let err = wrapf(io::Error::other("boom"), format_args!("code={:03}", 7));
        assert_eq!(err.to_string(), "boom; code=007");
    }

    #[test]
    fn repeated_wraps_share_one_stack() {
        let first = new(io::Error::other("base failure"));
        let first_rendered = get_error_with_stack(&first);

        let second = wrap(first, "second layer");
        let second_rendered = get_error_with_stack(&second);

        let third = crate::wrapf!(second, "third layer {}", 3);
        let third_rendered = get_error_with_stack(&third);

        assert_eq!(stack_part(&first_rendered), stack_part(&second_rendered));
        assert_eq!(stack_part(&second_rendered), stack_part(&third_rendered));
        assert!(third_rendered.starts_with("base failure; second layer; third layer 3\nStackTrace: "));
    }

    #[test]
    fn rewrap_reuses_stack_even_when_buried() {
        let traced = new(io::Error::other("deep"));
        let stack = traced.stack().to_string();

        let buried: BoxError = Box::new(WrappedError {
            message: "middle".to_string(),
            source: Box::new(traced),
        });
        let outer = wrap(buried, "outer");

        assert_eq!(outer.stack(), stack);
    }

    #[test]
    fn get_error_with_stack_plain_error() {
        let err = io::Error::other("no stack here");
        assert_eq!(get_error_with_stack(&err), "no stack here");
    }

    #[test]
    fn get_error_with_stack_format() {
        let err = new(io::Error::other("boom"));
        let rendered = get_error_with_stack(&err);
        assert_eq!(rendered, format!("boom\nStackTrace: {}", err.stack()));
    }
}
