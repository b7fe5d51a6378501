//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → spans.rs (per-request span with correlation ID)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request via its span
//! - `RUST_LOG` overrides the configured level

pub mod logging;
pub mod spans;
