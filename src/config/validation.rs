//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check that per-phase timeouts fit inside the overall budget
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the server is built

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ProxyConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.{name} ({value_ms}ms) exceeds timeouts.request_ms ({request_ms}ms)")]
    ExceedsRequestTimeout {
        name: &'static str,
        value_ms: u64,
        request_ms: u64,
    },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Error returned when a configuration fails validation.
#[derive(Debug, Error)]
#[error("invalid configuration: {}", join(.0))]
pub struct ConfigError(pub Vec<ValidationError>);

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let t = &config.timeouts;
    for (name, value) in [
        ("request_ms", t.request_ms),
        ("tls_handshake_ms", t.tls_handshake_ms),
        ("response_header_ms", t.response_header_ms),
        ("expect_continue_ms", t.expect_continue_ms),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    for (name, value) in [
        ("tls_handshake_ms", t.tls_handshake_ms),
        ("response_header_ms", t.response_header_ms),
    ] {
        if t.request_ms > 0 && value > t.request_ms {
            errors.push(ValidationError::ExceedsRequestTimeout {
                name,
                value_ms: value,
                request_ms: t.request_ms,
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.expect_continue_ms = 0;
        config.timeouts.response_header_ms = 9_000;
        config.observability.log_level = "loud".into();

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.0,
            vec![
                ValidationError::BindAddress("localhost".into()),
                ValidationError::ZeroTimeout("expect_continue_ms"),
                ValidationError::ExceedsRequestTimeout {
                    name: "response_header_ms",
                    value_ms: 9_000,
                    request_ms: 5_000,
                },
                ValidationError::LogLevel("loud".into()),
            ]
        );
        assert!(err.to_string().starts_with("invalid configuration: "));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = ProxyConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
