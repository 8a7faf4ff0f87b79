// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod json;
mod logger;

pub use config::ConfigError;
pub use json::JsonError;
pub use logger::LogError;

/// Type-erased error used wherever an arbitrary cause is carried.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
