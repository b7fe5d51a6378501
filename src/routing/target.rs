//! Target URL extraction and validation.
//!
//! # Responsibilities
//! - Strip the `/proxy/` prefix and capture the raw remainder of the path
//! - Re-attach the inbound query string to the remainder
//! - Require an absolute URI (scheme and host) before anything is dispatched
//!
//! # Design Decisions
//! - No percent-decoding: the remainder is taken exactly as it arrived
//! - Plain prefix strip, no regex, since only one pattern exists

use axum::http::Uri;
use url::Url;

use crate::forward::ForwardError;

/// Path prefix under which target URLs are embedded.
pub const PROXY_PREFIX: &str = "/proxy/";

/// Pull the embedded target out of an inbound request URI.
///
/// `/proxy/http://example.com/a?b=c` yields `http://example.com/a?b=c`.
pub fn extract_target(uri: &Uri) -> Result<String, ForwardError> {
    let remainder = uri.path().strip_prefix(PROXY_PREFIX).unwrap_or_default();
    if remainder.is_empty() {
        return Err(ForwardError::MissingTarget);
    }

    Ok(match uri.query() {
        Some(query) => format!("{remainder}?{query}"),
        None => remainder.to_string(),
    })
}

/// Parse a raw target, accepting only absolute URIs with a host.
pub fn parse_target(raw: &str) -> Result<Url, ForwardError> {
    if raw.is_empty() {
        return Err(ForwardError::MissingTarget);
    }

    let url = Url::parse(raw)?;
    if !url.has_host() {
        return Err(ForwardError::NotAbsolute(raw.to_string()));
    }
    Ok(url)
}
