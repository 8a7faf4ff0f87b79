// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the crate's own structured diagnostics.
//!
//! The library never installs a subscriber. Everything it reports goes
//! through `tracing`, and the message text lives in the struct-based
//! message types under [`messages`] so that:
//!
//! * No magic strings are scattered across the helpers
//! * Every event carries the same structured fields wherever it is raised
//! * Applications decide routing and verbosity with their own subscriber
//!
//! # Usage
//!
//! ```rust
//! use dashkit::observability::messages::StructuredLog;
//! use dashkit::observability::messages::errors::StackCaptured;
//!
//! StackCaptured { lines: 12 }.log();
//! ```

pub mod messages;
