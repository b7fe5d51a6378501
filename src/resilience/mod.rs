//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to upstream:
//!     → client timeouts (overall budget, connect + TLS)
//!     → timeouts.rs (response header wait)
//!     → on expiry: 504 Gateway Timeout
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every outbound call has a deadline
//! - Exactly one outbound attempt per inbound request, no retries

pub mod timeouts;
