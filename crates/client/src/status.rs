//! Simulated asynchronous status: the header connection indicator and the
//! discovery scan.
//!
//! Responsibilities:
//! - Model the connection lifecycle (`connecting → online`).
//! - Model the discovery scan as an explicit `Idle → Scanning → Idle` machine.
//! - Provide the cancellable timers that drive both transitions.
//!
//! Does NOT handle:
//! - Real reachability checks or network scanning. Neither timer can fail;
//!   the only alternative outcome is cancellation.
//!
//! Invariants:
//! - The connection monitor leaves `connecting` exactly once and never returns.
//! - A scan cannot start while another is running.
//! - The discovered device list exists before any scan and is unchanged by
//!   scanning or by the scan configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ScanError;
use crate::fixtures;
use crate::macros::labeled_enum;
use crate::models::{DiscoveredDevice, Protocol};

labeled_enum! {
    /// Link state shown in the header.
    pub enum ConnectionStatus: "connection status" {
        Connecting => ("connecting", "Connecting"),
        Online => ("online", "Online"),
        Offline => ("offline", "Offline"),
    }
}

/// Tracks the gateway connection indicator.
///
/// `Offline` exists in the vocabulary but no transition produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionMonitor {
    status: ConnectionStatus,
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        Self {
            status: ConnectionStatus::Connecting,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Transition `connecting → online`. Returns `false` if already past
    /// `connecting`.
    pub fn mark_online(&mut self) -> bool {
        if self.status != ConnectionStatus::Connecting {
            return false;
        }
        self.status = ConnectionStatus::Online;
        info!("Gateway connection established");
        true
    }
}

/// Result of the connection timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Online,
    Cancelled,
}

/// Wait `delay`, then report the gateway online, unless `cancel` fires first.
pub async fn probe_connection(delay: Duration, cancel: CancellationToken) -> ProbeOutcome {
    tokio::select! {
        _ = cancel.cancelled() => {
            debug!("Connection probe cancelled");
            ProbeOutcome::Cancelled
        }
        _ = tokio::time::sleep(delay) => ProbeOutcome::Online,
    }
}

/// Scan parameters entered on the discovery page.
///
/// Accepted and displayed, but they do not influence which devices are found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub start_ip: String,
    pub end_ip: String,
    pub timeout_ms: u64,
    pub protocols: Vec<Protocol>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start_ip: "192.168.1.1".to_string(),
            end_ip: "192.168.1.255".to_string(),
            timeout_ms: 5000,
            protocols: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Add or remove a protocol from the scan set.
    pub fn toggle_protocol(&mut self, protocol: Protocol) {
        if let Some(pos) = self.protocols.iter().position(|p| *p == protocol) {
            self.protocols.remove(pos);
        } else {
            self.protocols.push(protocol);
        }
    }
}

/// Phase of the discovery scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
}

/// Discovery page state: scan phase, configuration and the found devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryScan {
    phase: ScanPhase,
    config: ScanConfig,
    devices: Vec<DiscoveredDevice>,
    generation: u64,
}

impl Default for DiscoveryScan {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryScan {
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            config: ScanConfig::default(),
            devices: fixtures::discovered_devices(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ScanConfig {
        &mut self.config
    }

    pub fn devices(&self) -> &[DiscoveredDevice] {
        &self.devices
    }

    /// Identifier of the most recently started scan.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter `Scanning`. Returns the new scan's generation.
    pub fn start(&mut self) -> Result<u64, ScanError> {
        if self.is_scanning() {
            return Err(ScanError::AlreadyScanning);
        }
        self.phase = ScanPhase::Scanning;
        self.generation += 1;
        info!(
            generation = self.generation,
            start_ip = %self.config.start_ip,
            end_ip = %self.config.end_ip,
            "Discovery scan started"
        );
        Ok(self.generation)
    }

    /// Return to `Idle` if `generation` is the running scan. Completions from
    /// an older scan are ignored and return `false`.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_scanning() || generation != self.generation {
            debug!(generation, current = self.generation, "Ignoring stale scan completion");
            return false;
        }
        self.phase = ScanPhase::Idle;
        info!(generation, found = self.devices.len(), "Discovery scan finished");
        true
    }

    /// Abort the running scan, if any.
    pub fn cancel(&mut self) -> bool {
        if !self.is_scanning() {
            return false;
        }
        self.phase = ScanPhase::Idle;
        info!(generation = self.generation, "Discovery scan cancelled");
        true
    }

    /// Flip a device's selection. Returns the new state, or `None` for an
    /// unknown id.
    pub fn toggle_selected(&mut self, id: u32) -> Option<bool> {
        let device = self.devices.iter_mut().find(|d| d.id == id)?;
        device.selected = !device.selected;
        Some(device.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.devices.iter().filter(|d| d.selected).count()
    }
}

/// Result of the scan timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed,
    Cancelled,
}

/// Run the simulated scan for `duration`, unless `cancel` fires first.
pub async fn run_scan(duration: Duration, cancel: CancellationToken) -> ScanOutcome {
    tokio::select! {
        _ = cancel.cancelled() => ScanOutcome::Cancelled,
        _ = tokio::time::sleep(duration) => ScanOutcome::Completed,
    }
}
