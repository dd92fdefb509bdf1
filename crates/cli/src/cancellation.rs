//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Install the Ctrl+C listener that cancels a shared token.
//! - Define a single, recognizable `Cancelled` error used to signal
//!   user-initiated cancellation through `anyhow::Result`.
//! - Centralize the cancellation message and Unix-standard SIGINT exit code (130).
//!
//! Does NOT handle:
//! - Deciding *when* to check for cancellation; long-running commands race
//!   their work against `CancellationToken::cancelled()`.
//!
//! Invariants:
//! - Once cancelled, the token remains cancelled forever.

use std::fmt;

use tokio_util::sync::CancellationToken;

/// Standard Unix exit code for SIGINT: 128 + 2.
pub const SIGINT_EXIT_CODE: u8 = 130;

/// Spawn a task that cancels the returned token on Ctrl+C.
pub fn install_ctrl_c_handler() -> CancellationToken {
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        tracing::debug!("Ctrl+C received, cancelling");
        cancel_clone.cancel();
    });
    cancel
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_detected_through_context() {
        let err = anyhow::Error::new(Cancelled);
        assert!(is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("other")));
    }

    #[test]
    fn test_sigint_exit_code() {
        assert_eq!(SIGINT_EXIT_CODE, 130);
    }
}
