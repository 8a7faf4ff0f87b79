// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Attribute key used for the caller location when none is configured
pub const DEFAULT_SOURCE_FIELD_NAME: &str = "source";
/// Level applied when the config omits one
pub const DEFAULT_LOG_LEVEL: &str = "info";
