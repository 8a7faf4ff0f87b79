// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors that carry the call stack of the point where they were first
//! elevated to "stack-traced".
//!
//! The stack is captured once per error chain. Wrapping an error that
//! already carries a stack, directly or anywhere down its `source()`
//! chain, reuses that stack, so every rendering of the chain points at
//! the original failure site rather than at the outermost rewrap.
//!
//! ```rust
//! use dashkit::xerrors;
//!
//! let base = std::io::Error::other("disk full");
//! let err = xerrors::new(base);
//! let err = xerrors::wrap(err, "saving profile");
//! let err = dashkit::wrapf!(err, "user {}", 42);
//!
//! assert_eq!(err.to_string(), "disk full; saving profile; user 42");
//! assert!(xerrors::get_error_with_stack(&err).contains("\nStackTrace: "));
//! ```

mod ext;
mod stack_trace;
mod wrap;

pub use ext::ResultExt;
pub use stack_trace::{find_stack_trace, StackTraceError};
pub use wrap::{get_error_with_stack, new, wrap, wrapf};

/// Module path whose frames are dropped from captured stacks.
pub(crate) const PACKAGE_NAME: &str = module_path!();
