//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → axum matches `/proxy/` or `/proxy/{*target}` (GET, POST)
//!     → target.rs strips the prefix and validates the remainder
//!     → Forwarder dispatches to the validated URL
//! ```

pub mod target;

pub use target::{extract_target, parse_target, PROXY_PREFIX};
