// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Protobuf-JSON codec.
//!
//! Messages are `prost` types whose serde implementations follow the
//! protobuf JSON mapping (generated with `pbjson-build`). The mapping is
//! configured at generation time: `emit_fields()` emits unpopulated
//! fields with their default values, unknown fields are rejected.

use crate::errors::JsonError;
use crate::jsonkit::codec::unmarshal;
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a protobuf message with the protobuf JSON mapping.
pub fn marshal_proto<M>(msg: &M) -> Result<Vec<u8>, JsonError>
where
    M: Message + Serialize,
{
    serde_json::to_vec(msg).map_err(JsonError::Encode)
}

/// Decode a protobuf message from its JSON mapping, with the same strict
/// rules as [`unmarshal`].
pub fn unmarshal_proto<M>(data: &[u8]) -> Result<M, JsonError>
where
    M: Message + DeserializeOwned,
{
    unmarshal(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonkit::testdata::User;
    use serde_json::json;

    #[test]
    fn test_marshal_proto_success() {
        let user = User {
            name: "John".to_string(),
            age: 30,
            city: "New York".to_string(),
        };

        let data = marshal_proto(&user).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(value, json!({"name": "John", "age": 30, "city": "New York"}));
        assert_ne!(data.last(), Some(&b'\n'));
    }

    #[test]
    fn test_marshal_proto_emits_unpopulated_fields() {
        let user = User {
            name: "John".to_string(),
            ..Default::default()
        };

        let value: serde_json::Value = serde_json::from_slice(&marshal_proto(&user).unwrap()).unwrap();
        assert_eq!(value, json!({"name": "John", "age": 0, "city": ""}));
    }

    #[test]
    fn test_unmarshal_proto_success() {
        let user: User = unmarshal_proto(br#"{"name": "John", "age": 30, "city": "New York"}"#).unwrap();

        assert_eq!(user.name, "John");
        assert_eq!(user.age, 30);
        assert_eq!(user.city, "New York");
    }

    #[test]
    fn test_unmarshal_proto_missing_fields_default() {
        let user: User = unmarshal_proto(br#"{"name": "John"}"#).unwrap();
        assert_eq!(user.age, 0);
        assert_eq!(user.city, "");
    }

    #[test]
    fn test_unmarshal_proto_invalid_json() {
        let err = unmarshal_proto::<User>(br#"{"name": "John", "age": 30, "city": "New York" invalid"#)
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_unmarshal_proto_unknown_field() {
        let err = unmarshal_proto::<User>(br#"{"name": "John", "nickname": "JJ"}"#).unwrap_err();
        assert!(err.is_decode());
    }
}
