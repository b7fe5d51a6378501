//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (attach request ID)
//!     → routing (extract and validate target)
//!     → forward (outbound call, headers.rs in both directions)
//!     → response.rs (relay or mapped error)
//!     → Send to client
//! ```

pub mod headers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdExt};
pub use server::{AppState, HttpServer};
