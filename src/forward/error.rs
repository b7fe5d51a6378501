//! Per-request failure taxonomy.

use std::error::Error as StdError;
use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

/// Everything that can stop a request from being relayed.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Nothing followed the `/proxy/` prefix.
    #[error("invalid URL")]
    MissingTarget,

    /// The target did not parse as a URL.
    #[error(transparent)]
    InvalidTarget(#[from] url::ParseError),

    /// The target parsed but has no host to dispatch to.
    #[error("target URL has no host: {0}")]
    NotAbsolute(String),

    /// The outbound request could not be built from method and URL.
    #[error("{0}")]
    Build(String),

    /// The client's own timeout (overall budget or connect/TLS) fired.
    #[error("{0}")]
    Timeout(String),

    /// Response headers did not arrive in time.
    #[error("timeout awaiting response headers after {0:?}")]
    HeaderTimeout(Duration),

    /// Any other transport failure.
    #[error("{0}")]
    Transport(String),
}

impl ForwardError {
    /// Status code reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingTarget | Self::InvalidTarget(_) | Self::NotAbsolute(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Timeout(_) | Self::HeaderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Build(_) | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::HeaderTimeout(_))
    }
}

impl From<reqwest::Error> for ForwardError {
    fn from(err: reqwest::Error) -> Self {
        let text = error_chain(&err);
        if err.is_timeout() {
            Self::Timeout(text)
        } else if err.is_builder() {
            Self::Build(text)
        } else {
            Self::Transport(text)
        }
    }
}

/// Render an error followed by each of its sources, joined with `": "`.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // some clients repeat the inner message in their own Display
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
