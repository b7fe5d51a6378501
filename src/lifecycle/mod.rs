//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Default config → Validate → Build Forwarder → Bind → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs + http::server):
//!     Trigger → Stop accepting → Drain in-flight (bounded) → Exit
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal
//! - Shutdown has a grace period: remaining connections are dropped after it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::Signal;
