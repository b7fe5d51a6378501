//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy routes
//! - Wire up middleware (request ID, tracing)
//! - Hand each request to the Forwarder
//! - Serve until shutdown, then drain within the grace period

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::forward::{ForwardError, Forwarder};
use crate::http::request::assign_request_id;
use crate::observability::spans::make_request_span;
use crate::routing::extract_target;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the forwarding proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the outbound client cannot be constructed.
    pub fn new(config: ProxyConfig) -> reqwest::Result<Self> {
        let state = AppState {
            forwarder: Arc::new(Forwarder::new(&config.timeouts)?),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(
                "/proxy/",
                get(proxy_handler).post(proxy_handler).head(reject_head),
            )
            .route(
                "/proxy/{*target}",
                get(proxy_handler).post(proxy_handler).head(reject_head),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(assign_request_id))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span)),
            )
    }

    /// The fully layered router, for serving or driving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain.
    ///
    /// After the signal no new connections are accepted. In-flight requests
    /// get `shutdown.grace_period_ms` to finish; whatever is still open after
    /// that is abandoned and the call returns.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let grace = self.config.shutdown.grace_period();
        tracing::info!(address = %addr, "HTTP server starting");

        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => {
                result?;
                tracing::info!("HTTP server stopped");
                return Ok(());
            }
            _ = shutdown.recv() => {}
        }

        tracing::info!(
            grace_period_ms = grace.as_millis() as u64,
            "Stopped accepting connections, draining in-flight requests"
        );
        let _ = drain_tx.send(());

        match tokio::time::timeout(grace, server).await {
            Ok(result) => {
                result?;
                tracing::info!("HTTP server stopped");
            }
            Err(_) => {
                tracing::warn!(
                    grace_period_ms = grace.as_millis() as u64,
                    "Grace period elapsed, closing remaining connections"
                );
            }
        }
        Ok(())
    }
}

/// Main proxy handler.
/// Extracts the embedded target and forwards the request to it.
async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ForwardError> {
    let target = extract_target(&uri)?;
    state.forwarder.forward(method, &target, &headers, body).await
}

/// Axum answers HEAD from GET routes unless HEAD is routed explicitly;
/// only GET and POST are forwarded.
async fn reject_head() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,POST")],
    )
}
