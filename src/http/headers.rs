//! Header propagation in both directions.
//!
//! # Design Decisions
//! - Values are appended, never inserted, so repeated keys keep every value
//! - Order within a key is preserved
//! - Only the inbound `Host` is withheld from the upstream request; the
//!   client sets it from the target URL

use axum::http::{header, HeaderMap};

/// Append every value of every header in `src` onto `dst`.
pub fn copy_headers(dst: &mut HeaderMap, src: &HeaderMap) {
    for (name, value) in src.iter() {
        dst.append(name.clone(), value.clone());
    }
}

/// Headers to send upstream for an inbound header map.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len());
    copy_headers(&mut headers, inbound);
    headers.remove(header::HOST);
    headers
}
