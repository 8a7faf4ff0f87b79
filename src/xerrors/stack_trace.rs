// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BoxError;
use crate::observability::messages::errors::{StackCaptured, StackReused};
use crate::observability::messages::StructuredLog;
use crate::xerrors::PACKAGE_NAME;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Stack lines containing any of these markers are dropped.
const FILTERED_MARKERS: [&str; 3] = ["std::backtrace", PACKAGE_NAME, "[running]"];

/// An error decorated with a filtered call stack.
///
/// `Display` shows only the wrapped error; use [`error_with_stack`] or
/// [`get_error_with_stack`] to render the stack as well.
///
/// [`error_with_stack`]: StackTraceError::error_with_stack
/// [`get_error_with_stack`]: crate::xerrors::get_error_with_stack
#[derive(Debug)]
pub struct StackTraceError {
    source: BoxError,
    stack: Arc<str>,
}

impl StackTraceError {
    /// Decorate `err`, reusing the stack of any stack-traced error already
    /// in its chain and capturing a new one otherwise.
    pub(crate) fn capture(err: BoxError) -> Self {
        let existing = find_stack_trace(&*err).map(|st| Arc::clone(&st.stack));

        let stack = match existing {
            Some(stack) => {
                StackReused.log();
                stack
            }
            None => {
                let stack = filter_stack_trace(&Backtrace::force_capture().to_string());
                StackCaptured {
                    lines: stack.lines().count(),
                }
                .log();
                Arc::from(stack)
            }
        };

        Self { source: err, stack }
    }

    /// The filtered stack captured for this error chain.
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// `"<error>\nStackTrace: <stack>"`
    pub fn error_with_stack(&self) -> String {
        format!("{}\nStackTrace: {}", self.source, self.stack)
    }

    /// Give back the wrapped error, dropping the stack.
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for StackTraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Error for StackTraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Walk `err` and its `source()` chain, returning the outermost
/// stack-traced error.
pub fn find_stack_trace<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a StackTraceError> {
    std::iter::successors(Some(err), |&e| e.source()).find_map(|e| e.downcast_ref::<StackTraceError>())
}

/// Drop every line mentioning a filtered marker, keeping the order of the
/// rest. The indented `at <file>` line below a dropped frame goes with it.
fn filter_stack_trace(stack: &str) -> String {
    let mut kept = Vec::new();
    let mut dropping_frame = false;

    for line in stack.lines() {
        let is_location = line.trim_start().starts_with("at ");
        if is_location && dropping_frame {
            continue;
        }

        if FILTERED_MARKERS.iter().any(|marker| line.contains(marker)) {
            dropping_frame = !is_location;
            continue;
        }

        dropping_frame = false;
        kept.push(line);
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xerrors::get_error_with_stack;
    use std::io;

    const SAMPLE_STACK: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
   1: std::backtrace::Backtrace::create
             at /rustc/library/std/src/backtrace.rs:331:13
   2: dashkit::xerrors::stack_trace::StackTraceError::capture
             at ./src/xerrors/stack_trace.rs:40:39
   3: app::handlers::save_profile
             at ./src/handlers.rs:88:9
thread 'main' [running]:
   4: app::main
             at ./src/main.rs:12:5";

    #[test]
    fn filter_drops_capture_internals_and_own_frames() {
        let filtered = filter_stack_trace(SAMPLE_STACK);

        assert_eq!(
            filtered,
            "   3: app::handlers::save_profile
             at ./src/handlers.rs:88:9
   4: app::main
             at ./src/main.rs:12:5"
        );
    }

    #[test]
    fn filter_keeps_unrelated_lines_in_order() {
        let stack = "first\nsecond\nthird";
        assert_eq!(filter_stack_trace(stack), stack);
    }

    #[test]
    fn filter_of_empty_stack_is_empty() {
        assert_eq!(filter_stack_trace(""), "");
    }

    #[test]
    fn display_shows_only_wrapped_error() {
        let err = StackTraceError::capture(Box::new(io::Error::other("boom")));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn source_returns_wrapped_error() {
        let err = StackTraceError::capture(Box::new(io::Error::other("boom")));
        let source = err.source().expect("source should exist");
        assert_eq!(source.to_string(), "boom");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn capture_reuses_stack_found_in_chain() {
        let inner = StackTraceError::capture(Box::new(io::Error::other("boom")));
        let inner_stack = inner.stack().to_string();

        let outer = StackTraceError::capture(Box::new(inner));
        assert_eq!(outer.stack(), inner_stack);
    }

    #[test]
    fn captured_stack_excludes_capture_internals() {
        let err = StackTraceError::capture(Box::new(io::Error::other("boom")));
        assert!(!err.stack().contains("std::backtrace"));
        assert!(!err.stack().contains(PACKAGE_NAME));
    }

    #[test]
    fn find_stack_trace_on_plain_error_is_none() {
        let err = io::Error::other("plain");
        assert!(find_stack_trace(&err).is_none());
    }

    #[test]
    fn find_stack_trace_walks_past_plain_wrappers() {
        #[derive(Debug, thiserror::Error)]
        #[error("request failed")]
        struct RequestFailed(#[source] StackTraceError);

        let traced = StackTraceError::capture(Box::new(io::Error::other("boom")));
        let stack = traced.stack().to_string();
        let outer = RequestFailed(traced);

        let found = find_stack_trace(&outer).expect("stack-traced error in chain");
        assert_eq!(found.stack(), stack);
        assert_eq!(get_error_with_stack(&outer), format!("boom\nStackTrace: {stack}"));
    }

    #[test]
    fn into_inner_returns_original() {
        let err = StackTraceError::capture(Box::new(io::Error::other("boom")));
        let inner = err.into_inner();
        assert_eq!(inner.to_string(), "boom");
    }
}
