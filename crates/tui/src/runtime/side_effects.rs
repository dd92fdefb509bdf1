//! Timers spawned on behalf of status actions.
//!
//! Responsibilities:
//! - Run the discovery scan timer for `RunScan` and report `ScanFinished`.
//! - Run the startup connection probe and report `ConnectionEstablished`.
//!
//! Does NOT handle:
//! - Application state (results come back as actions).
//!
//! Invariants:
//! - A cancelled timer sends nothing.
//! - Every spawned timer watches a `CancellationToken`.

use std::time::Duration;

use gateway_client::{ProbeOutcome, ScanOutcome, probe_connection, run_scan};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::action::Action;

/// Spawn work for actions that need it. Other actions are ignored.
pub fn handle_side_effects(
    action: Action,
    tx: Sender<Action>,
    scan_duration: Duration,
) -> Option<JoinHandle<()>> {
    match action {
        Action::RunScan {
            epoch,
            generation,
            cancel,
        } => Some(tokio::spawn(async move {
            match run_scan(scan_duration, cancel).await {
                ScanOutcome::Completed => {
                    let _ = tx.send(Action::ScanFinished { epoch, generation }).await;
                }
                ScanOutcome::Cancelled => debug!(generation, "Scan timer cancelled"),
            }
        })),
        _ => None,
    }
}

/// Start the connection indicator timer.
pub fn spawn_connection_probe(
    delay: Duration,
    tx: Sender<Action>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if probe_connection(delay, cancel).await == ProbeOutcome::Online {
            let _ = tx.send(Action::ConnectionEstablished).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::channel;

    #[tokio::test(start_paused = true)]
    async fn test_run_scan_reports_finished() {
        let (tx, mut rx) = channel(4);
        let handle = handle_side_effects(
            Action::RunScan {
                epoch: 3,
                generation: 1,
                cancel: CancellationToken::new(),
            },
            tx,
            Duration::from_millis(3000),
        )
        .unwrap();
        handle.await.unwrap();
        assert!(matches!(
            rx.recv().await,
            Some(Action::ScanFinished {
                epoch: 3,
                generation: 1
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_scan_sends_nothing() {
        let (tx, mut rx) = channel(4);
        let cancel = CancellationToken::new();
        let handle = handle_side_effects(
            Action::RunScan {
                epoch: 1,
                generation: 1,
                cancel: cancel.clone(),
            },
            tx,
            Duration::from_secs(3),
        )
        .unwrap();
        cancel.cancel();
        handle.await.unwrap();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_other_actions_spawn_nothing() {
        let (tx, _rx) = channel(1);
        assert!(handle_side_effects(Action::Tick, tx, Duration::ZERO).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_reports_online() {
        let (tx, mut rx) = channel(1);
        spawn_connection_probe(Duration::from_millis(1500), tx, CancellationToken::new())
            .await
            .unwrap();
        assert!(matches!(rx.recv().await, Some(Action::ConnectionEstablished)));
    }
}
