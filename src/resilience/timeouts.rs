//! Timeout enforcement.
//!
//! # Responsibilities
//! - Bound the wait for upstream response headers
//! - Fold the elapsed case into the same error type as client timeouts
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors
//! - Timed-out requests return 504 Gateway Timeout

use std::future::Future;
use std::time::Duration;

use crate::forward::ForwardError;

/// Await `call` until it yields response headers, or fail with
/// [`ForwardError::HeaderTimeout`] once `limit` passes.
///
/// Dropping the call on expiry aborts the outbound request.
pub async fn with_header_timeout<F, T, E>(limit: Duration, call: F) -> Result<T, ForwardError>
where
    F: Future<Output = Result<T, E>>,
    ForwardError: From<E>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(ForwardError::from),
        Err(_) => Err(ForwardError::HeaderTimeout(limit)),
    }
}
