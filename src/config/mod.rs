// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;

pub mod consts;

pub use loader::{load_logger_config, parse_logger_config, ConfigFormat, LogOutput, LoggerConfig};
