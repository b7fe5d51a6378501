//! Forwarder: one inbound request in, one outbound request out.
//!
//! # Data Flow
//! ```text
//! method + raw target + headers + body
//!     → routing::parse_target (absolute URI or 400)
//!     → http::headers::outbound_headers (all values, Host withheld)
//!     → shared reqwest::Client (overall + connect/TLS timeouts)
//!     → resilience::timeouts (response header wait)
//!     → http::response::relay (status, headers, streamed body)
//! ```

pub mod client;
pub mod error;

pub use error::{error_chain, ForwardError};

use axum::{
    body::{Body, HttpBody},
    http::{HeaderMap, Method},
    response::Response,
};
use std::time::Duration;

use crate::config::TimeoutConfig;
use crate::http::headers::outbound_headers;
use crate::http::response::relay;
use crate::resilience::timeouts::with_header_timeout;
use crate::routing::parse_target;

/// Issues outbound calls on behalf of inbound requests.
///
/// Immutable after construction and shared across all request tasks.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    response_header_timeout: Duration,
}

impl Forwarder {
    /// Build a forwarder with its own client.
    pub fn new(timeouts: &TimeoutConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: client::build_client(timeouts)?,
            response_header_timeout: timeouts.response_header(),
        })
    }

    /// Forward one request to `target` and relay the outcome.
    pub async fn forward(
        &self,
        method: Method,
        target: &str,
        headers: &HeaderMap,
        body: Body,
    ) -> Result<Response, ForwardError> {
        let url = parse_target(target)?;

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = outbound_headers(headers);
        if body.size_hint().exact() != Some(0) {
            *request.body_mut() = Some(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Dispatching outbound request"
        );

        // the header window also covers uploading the request body
        let upstream = with_header_timeout(
            self.response_header_timeout,
            self.client.execute(request),
        )
        .await
        .inspect_err(|e| {
            tracing::warn!(url = %target, error = %e, "Outbound request failed");
        })?;

        tracing::debug!(status = %upstream.status(), "Relaying upstream response");
        Ok(relay(upstream))
    }
}
