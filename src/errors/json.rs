// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for JSON / protobuf-JSON encoding, decoding and request binding.

use crate::errors::BoxError;
use thiserror::Error;

/// Errors produced by the `jsonkit` helpers
#[derive(Debug, Error)]
pub enum JsonError {
    /// The payload is not valid JSON or does not fit the target type
    #[error("failed to decode json: {0}")]
    Decode(#[source] serde_json::Error),

    /// The payload carries a key the target type does not declare
    #[error("failed to decode json: unknown field `{0}`")]
    UnknownField(String),

    /// Something other than whitespace follows the first JSON value
    #[error("failed to decode json: unexpected extra JSON data found")]
    TrailingData(#[source] serde_json::Error),

    /// The value cannot be represented as JSON
    #[error("failed to encode json: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading the HTTP request body failed
    #[error("failed to read request body: {0}")]
    Body(#[source] BoxError),

    /// Assembling the HTTP response failed
    #[error("failed to build response: {0}")]
    Response(#[from] http::Error),
}

impl JsonError {
    /// True for every failure that originates from decoding the payload.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            JsonError::Decode(_) | JsonError::UnknownField(_) | JsonError::TrailingData(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_family_is_classified_as_decode() {
        let malformed = serde_json::from_str::<u8>("{").unwrap_err();
        let trailing = serde_json::from_str::<u8>("1 2").unwrap_err();

        assert!(JsonError::Decode(malformed).is_decode());
        assert!(JsonError::UnknownField("extra".to_string()).is_decode());
        assert!(JsonError::TrailingData(trailing).is_decode());

        let body = JsonError::Body("connection reset".into());
        assert!(!body.is_decode());
    }

    #[test]
    fn unknown_field_message_names_the_field() {
        let err = JsonError::UnknownField("address.zip".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode json: unknown field `address.zip`"
        );
    }
}
