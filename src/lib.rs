// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;       // logger config loading
pub mod errors;       // error handling
pub mod jsonkit;      // strict JSON + protobuf JSON + HTTP binding
pub mod logger;       // context-aware structured logging
pub mod observability;
pub mod sliceskit;    // nil-tolerant slice combinators
pub mod xerrors;      // stack-traced error wrapping
