//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT and SIGTERM at startup
//! - Translate the first one received into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Registration happens eagerly so a failure is a startup error
//! - No other signals are handled

use std::fmt;
use std::io;

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// A signal that asks the proxy to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Interrupt => f.write_str("SIGINT"),
            Signal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Register signal handlers and spawn a task that triggers `shutdown` once.
#[cfg(unix)]
pub fn listen(shutdown: Shutdown) -> io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut int_sig = signal(SignalKind::interrupt())?;
    let mut term_sig = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        let caught = tokio::select! {
            _ = int_sig.recv() => Signal::Interrupt,
            _ = term_sig.recv() => Signal::Terminate,
        };
        tracing::info!(signal = %caught, "Caught signal, shutting down gracefully");
        shutdown.trigger();
    }))
}

/// Register signal handlers and spawn a task that triggers `shutdown` once.
#[cfg(not(unix))]
pub fn listen(shutdown: Shutdown) -> io::Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!(signal = %Signal::Interrupt, "Caught signal, shutting down gracefully");
                shutdown.trigger();
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names() {
        assert_eq!(Signal::Interrupt.to_string(), "SIGINT");
        assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
    }

    #[tokio::test]
    async fn listen_registers_without_triggering() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        let handle = listen(shutdown).unwrap();

        assert!(rx.try_recv().is_err());
        handle.abort();
    }
}
