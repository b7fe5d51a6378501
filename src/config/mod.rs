//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyConfig::default() (or a deserialized document)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → timeouts handed to the Forwarder, the rest to the server and lifecycle
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated
//! - All fields have defaults; the defaults are the production values
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProxyConfig;
pub use schema::ShutdownConfig;
pub use schema::TimeoutConfig;
pub use validation::{validate_config, ConfigError, ValidationError};
