//! Shared outbound client construction.

use crate::config::TimeoutConfig;

/// Build the one client every request is dispatched through.
///
/// The response header timeout is not a client setting; the Forwarder
/// enforces it around the call that resolves once headers arrive.
pub fn build_client(timeouts: &TimeoutConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeouts.request())
        // covers TCP connect and the TLS handshake
        .connect_timeout(timeouts.tls_handshake())
        .no_proxy()
        .build()
}
