// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::JsonError;
use crate::observability::messages::json::DecodeRejected;
use crate::observability::messages::StructuredLog;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_ignored::Path;

/// Encode `value` as compact JSON followed by a newline.
pub fn marshal<T>(value: &T) -> Result<Vec<u8>, JsonError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    serde_json::to_writer(&mut buf, value).map_err(JsonError::Encode)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Strictly decode a single JSON document into `T`.
///
/// Unlike plain `serde_json`, keys that `T` does not declare are an error
/// even when `T` does not opt into `deny_unknown_fields`, and trailing
/// content after the document is rejected. Unknown keys are reported by
/// path, e.g. `address.zip` or `items.0.sku`.
///
/// Keys buffered for a `#[serde(flatten)]` field never reach this check:
/// serde drops the leftovers itself. A struct with flattened fields needs
/// `#[serde(deny_unknown_fields)]` on the outer struct to reject them.
pub fn unmarshal<T>(data: &[u8]) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    decode_strict(data).map_err(|error| {
        DecodeRejected {
            target: std::any::type_name::<T>(),
            error: &error,
        }
        .log();
        error
    })
}

fn decode_strict<T>(data: &[u8]) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_slice(data);
    let mut unknown = None;

    let value = serde_ignored::deserialize(&mut de, |path| {
        if unknown.is_none() {
            unknown = Some(field_path(&path));
        }
    })
    .map_err(JsonError::Decode)?;

    if let Some(field) = unknown {
        return Err(JsonError::UnknownField(field));
    }
    de.end().map_err(JsonError::TrailingData)?;

    Ok(value)
}

/// Dotted key path of an ignored value, without the `?` markers
/// `serde_ignored` adds for options and newtypes.
fn field_path(path: &Path<'_>) -> String {
    let mut segments = Vec::new();
    let mut node = path;

    loop {
        match *node {
            Path::Root => break,
            Path::Seq { parent, index } => {
                segments.push(index.to_string());
                node = parent;
            }
            Path::Map { parent, ref key } => {
                segments.push(key.clone());
                node = parent;
            }
            Path::Some { parent }
            | Path::NewtypeStruct { parent }
            | Path::NewtypeVariant { parent } => node = parent,
        }
    }

    segments.reverse();
    segments.join(".")
}
