// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request-body binding and JSON responses over `http` types.

use crate::errors::JsonError;
use crate::jsonkit::codec::{marshal, unmarshal};
use crate::jsonkit::proto::{marshal_proto, unmarshal_proto};
use crate::jsonkit::JSON_CONTENT_TYPE;
use crate::observability::messages::json::{BindingRequestBody, RequestBodyRestored, ResponseEncoded};
use crate::observability::messages::StructuredLog;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Request, Response, StatusCode};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::Instrument;

/// Strictly decode the request body into `T`.
///
/// The body is buffered and an identical body is put back on the request,
/// so downstream consumers can read it again. If reading the body fails
/// the request is left with an empty (`Default`) body and
/// [`JsonError::Body`] is returned.
pub async fn bind_request_body<T, B>(req: &mut Request<B>) -> Result<T, JsonError>
where
    T: DeserializeOwned,
    B: Body + From<Bytes> + Default,
    B::Error: Into<crate::errors::BoxError>,
{
    let msg = BindingRequestBody {
        target: std::any::type_name::<T>(),
    };
    let span = msg.span("bind_request_body");

    async {
        msg.log();
        let data = buffer_body(req).await?;
        unmarshal(&data)
    }
    .instrument(span)
    .await
}

/// Decode the request body as the protobuf JSON mapping of `M`, leaving
/// the body readable for downstream consumers. Body read failures behave
/// as in [`bind_request_body`].
pub async fn bind_proto_request_body<M, B>(req: &mut Request<B>) -> Result<M, JsonError>
where
    M: Message + DeserializeOwned,
    B: Body + From<Bytes> + Default,
    B::Error: Into<crate::errors::BoxError>,
{
    let msg = BindingRequestBody {
        target: std::any::type_name::<M>(),
    };
    let span = msg.span("bind_proto_request_body");

    async {
        msg.log();
        let data = buffer_body(req).await?;
        unmarshal_proto(&data)
    }
    .instrument(span)
    .await
}

/// Encode `value` and wrap it in a response with `status` and a JSON
/// content type. Encoding failures are returned and no response is built.
pub fn json_response<T>(status: StatusCode, value: &T) -> Result<Response<Full<Bytes>>, JsonError>
where
    T: Serialize + ?Sized,
{
    let body = marshal(value)?;
    build_response(status, body)
}

/// [`json_response`] for protobuf messages, using the protobuf JSON mapping.
pub fn proto_json_response<M>(status: StatusCode, msg: &M) -> Result<Response<Full<Bytes>>, JsonError>
where
    M: Message + Serialize,
{
    let body = marshal_proto(msg)?;
    build_response(status, body)
}

async fn buffer_body<B>(req: &mut Request<B>) -> Result<Bytes, JsonError>
where
    B: Body + From<Bytes> + Default,
    B::Error: Into<crate::errors::BoxError>,
{
    // The request keeps the `Default` body if collecting fails
    let body = std::mem::take(req.body_mut());
    let data = body
        .collect()
        .await
        .map_err(|e| JsonError::Body(e.into()))?
        .to_bytes();

    // Bytes clones share the buffer
    *req.body_mut() = B::from(data.clone());
    RequestBodyRestored { bytes: data.len() }.log();

    Ok(data)
}

fn build_response(status: StatusCode, body: Vec<u8>) -> Result<Response<Full<Bytes>>, JsonError> {
    ResponseEncoded {
        status: status.as_u16(),
        bytes: body.len(),
    }
    .log();

    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
        .body(Full::new(Bytes::from(body)))?;
    Ok(response)
}
