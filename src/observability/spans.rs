//! Request spans.
//!
//! Every inbound request gets one span carrying its request ID, method and
//! URI, so that Forwarder logs can be correlated with the access log emitted
//! by `tower_http::trace::TraceLayer`.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request::RequestIdExt;

/// `make_span_with` callback for the trace layer.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .request_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}
