//! Minimal HTTP forwarding proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ GET|POST /proxy/{target}
//!                   │
//!                   ▼
//!             ┌───────────┐   ┌───────────┐   ┌─────────────────┐
//!             │  http     │──▶│  routing  │──▶│    forward      │──▶ {target}
//!             │  server   │   │  target   │   │ reqwest client  │
//!             └───────────┘   └───────────┘   └────────┬────────┘
//!                   ▲                                  │
//!     Client ◀──────┴──── relayed status/headers/body ◀┘
//!
//!     lifecycle: SIGINT/SIGTERM → stop accepting → bounded drain
//! ```

use tokio::net::TcpListener;

use forward_proxy::config::{validate_config, ProxyConfig};
use forward_proxy::lifecycle::{signals, Shutdown};
use forward_proxy::observability::logging;
use forward_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProxyConfig::default();

    logging::init(&config.observability);

    tracing::info!("forward-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    validate_config(&config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_ms = config.timeouts.request_ms,
        tls_handshake_timeout_ms = config.timeouts.tls_handshake_ms,
        response_header_timeout_ms = config.timeouts.response_header_ms,
        expect_continue_timeout_ms = config.timeouts.expect_continue_ms,
        grace_period_ms = config.shutdown.grace_period_ms,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .inspect_err(|e| {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::listen(shutdown)?;

    if let Err(e) = server.run(listener, server_shutdown).await {
        tracing::error!(error = %e, "Unable to shut down server");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
