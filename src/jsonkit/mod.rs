// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Strict JSON and protobuf-JSON binding for HTTP handlers.
//!
//! Decoding is strict everywhere: keys the target type does not declare
//! are rejected, and so is anything but whitespace after the first JSON
//! value. Encoding helpers produce ready-to-send `http` responses with
//! `Content-Type: application/json`.
//!
//! ```rust
//! use dashkit::jsonkit;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let user: User = jsonkit::unmarshal(br#"{"name":"John","age":30}"#).unwrap();
//! assert_eq!(user.age, 30);
//!
//! let err = jsonkit::unmarshal::<User>(br#"{"name":"John","age":30,"extra":1}"#).unwrap_err();
//! assert!(err.is_decode());
//! ```

mod binding;
mod codec;
mod proto;

#[cfg(test)]
pub(crate) mod testdata;

pub use binding::{bind_proto_request_body, bind_request_body, json_response, proto_json_response};
pub use codec::{marshal, unmarshal};
pub use proto::{marshal_proto, unmarshal_proto};

/// Value of the `Content-Type` header set on every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json";
