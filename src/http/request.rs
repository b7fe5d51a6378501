//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per inbound request
//! - Make it available to the trace span through request extensions
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The ID lives in extensions only; it is never written into headers, so
//!   the forwarded header set is exactly what the caller sent

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Unique identifier for one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access to the [`RequestId`] attached by [`assign_request_id`].
pub trait RequestIdExt {
    fn request_id(&self) -> Option<RequestId>;
}

impl<B> RequestIdExt for axum::http::Request<B> {
    fn request_id(&self) -> Option<RequestId> {
        self.extensions().get::<RequestId>().copied()
    }
}

/// Middleware attaching a fresh [`RequestId`] to every request.
pub async fn assign_request_id(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(RequestId::new());
    next.run(request).await
}
