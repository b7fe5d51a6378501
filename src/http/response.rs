//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay the upstream response to the caller (status, headers, body)
//! - Map forwarding failures to plain-text error responses
//!
//! # Design Decisions
//! - Streaming responses avoid buffering entire body
//! - Headers are relayed verbatim, nothing added or removed
//! - Upstream timeouts result in 504 Gateway Timeout

use axum::{
    body::Body,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;

use crate::forward::ForwardError;
use crate::http::headers::copy_headers;

/// Turn an upstream response into the caller-facing response.
///
/// The body is passed through as a stream; dropping the returned response
/// drops the upstream connection with it.
pub fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut response = Response::new(Body::empty());
    copy_headers(response.headers_mut(), upstream.headers());
    *response.status_mut() = status;

    let stream = upstream.bytes_stream().inspect_err(|e| {
        tracing::warn!(error = %e, "Upstream body aborted mid-relay");
    });
    *response.body_mut() = Body::from_stream(stream);
    response
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let mut response = (self.status(), self.to_string()).into_response();
        response.headers_mut().insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}
