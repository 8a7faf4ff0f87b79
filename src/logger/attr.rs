// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Value of a log attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => f.write_str(s),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Uint(u) => write!(f, "{u}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Uint(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Uint(value.into())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Uint(value as u64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// A key/value pair attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: AttrValue,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Serializes attributes as a single JSON object in insertion order.
pub(crate) struct AttrsJson<'a>(pub &'a [Attr]);

impl Serialize for AttrsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for attr in self.0 {
            map.serialize_entry(&attr.key, &attr.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Attr::new("k", "v").value, AttrValue::String("v".to_string()));
        assert_eq!(Attr::new("k", -3).value, AttrValue::Int(-3));
        assert_eq!(Attr::new("k", 7u32).value, AttrValue::Uint(7));
        assert_eq!(Attr::new("k", 2usize).value, AttrValue::Uint(2));
        assert_eq!(Attr::new("k", 0.5).value, AttrValue::Float(0.5));
        assert_eq!(Attr::new("k", true).value, AttrValue::Bool(true));
    }

    #[test]
    fn test_attrs_serialize_as_one_object_in_order() {
        let attrs = vec![
            Attr::new("user", "ann"),
            Attr::new("path", "/a b"),
            Attr::new("count", 3),
            Attr::new("ratio", 0.25),
        ];

        let rendered = serde_json::to_string(&AttrsJson(&attrs)).unwrap();
        assert_eq!(rendered, r#"{"user":"ann","path":"/a b","count":3,"ratio":0.25}"#);
    }

    #[test]
    fn test_no_attrs_is_empty_object() {
        assert_eq!(serde_json::to_string(&AttrsJson(&[])).unwrap(), "{}");
    }

    #[test]
    fn test_json_values_are_untagged() {
        let value = serde_json::to_value(vec![
            AttrValue::from("x"),
            AttrValue::from(1i64),
            AttrValue::from(true),
        ])
        .unwrap();
        assert_eq!(value, serde_json::json!(["x", 1, true]));
    }
}
