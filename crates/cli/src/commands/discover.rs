//! Run the simulated discovery scan.
//!
//! Responsibilities:
//! - Drive `DiscoveryScan` through `Idle → Scanning → Idle` with the
//!   configured duration.
//! - Abort with `Cancelled` when Ctrl+C fires mid-scan.
//!
//! Invariants:
//! - The scan range, timeout and protocols are echoed back but do not change
//!   which devices are reported.

use std::time::Duration;

use anyhow::Result;
use gateway_client::{DiscoveryScan, ScanConfig, ScanOutcome, run_scan};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::Output;
use crate::cancellation::Cancelled;
use crate::formatters::ScanReport;

/// Run one scan and return its report, or `Cancelled`.
pub async fn scan(
    config: ScanConfig,
    duration: Duration,
    cancel: &CancellationToken,
) -> Result<ScanReport> {
    let mut scan = DiscoveryScan::new();
    *scan.config_mut() = config;
    let generation = scan.start()?;
    info!(duration_ms = duration.as_millis() as u64, "Waiting for scan to finish");

    match run_scan(duration, cancel.clone()).await {
        ScanOutcome::Completed => {
            scan.finish(generation);
        }
        ScanOutcome::Cancelled => {
            scan.cancel();
            return Err(Cancelled.into());
        }
    }

    Ok(ScanReport {
        config: scan.config().clone(),
        duration_ms: duration.as_millis() as u64,
        devices: scan.devices().to_vec(),
    })
}

pub async fn run(
    config: ScanConfig,
    duration: Duration,
    out: &Output<'_>,
    cancel: &CancellationToken,
) -> Result<()> {
    let report = scan(config, duration, cancel).await?;
    out.emit(&out.formatter().format_scan(&report)?)
}
