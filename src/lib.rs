//! Minimal HTTP forwarding proxy library.
//!
//! `GET|POST /proxy/{target}` issues the same request to `{target}` and
//! streams the upstream response back unchanged.

// Core subsystems
pub mod config;
pub mod forward;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::schema::ProxyConfig;
pub use forward::{ForwardError, Forwarder};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
