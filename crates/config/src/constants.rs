//! Centralized constants for the gateway console workspace.
//!
//! This module contains default values and bounds used across crates to
//! avoid magic number duplication.

// =============================================================================
// Gateway Defaults
// =============================================================================

/// Gateway shown in the header when none is configured.
pub const DEFAULT_GATEWAY_NAME: &str = "Gateway-001";

/// Delay before the simulated connection reports online, in milliseconds.
pub const DEFAULT_CONNECT_DELAY_MS: u64 = 1500;

/// Duration of a simulated discovery scan, in milliseconds.
pub const DEFAULT_SCAN_DURATION_MS: u64 = 3000;

// =============================================================================
// Timer Bounds
// =============================================================================

/// Maximum connection delay (1 minute).
pub const MAX_CONNECT_DELAY_MS: u64 = 60_000;

/// Maximum scan duration (10 minutes).
pub const MAX_SCAN_DURATION_MS: u64 = 600_000;

/// Minimum UI tick; faster ticks only burn CPU.
pub const MIN_UI_TICK_MS: u64 = 16;

/// Maximum UI tick; slower ticks make the spinner look frozen.
pub const MAX_UI_TICK_MS: u64 = 5_000;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Header clock refresh interval in milliseconds.
pub const CLOCK_TICK_MS: u64 = 1_000;

/// Terminal width (columns) below which the mobile drawer replaces the sidebar.
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 100;

/// Accepted range for the mobile breakpoint.
pub const MIN_MOBILE_BREAKPOINT: u16 = 40;
pub const MAX_MOBILE_BREAKPOINT: u16 = 400;

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

/// Interval between automatic saves of persisted UI state, in seconds.
pub const AUTO_SAVE_INTERVAL_SECS: u64 = 30;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_GATEWAY_NAME: &str = "IIOT_GATEWAY_NAME";
pub const ENV_CONNECT_DELAY_MS: &str = "IIOT_CONNECT_DELAY_MS";
pub const ENV_SCAN_DURATION_MS: &str = "IIOT_SCAN_DURATION_MS";
pub const ENV_UI_TICK_MS: &str = "IIOT_UI_TICK_MS";
pub const ENV_MOBILE_BREAKPOINT: &str = "IIOT_MOBILE_BREAKPOINT";
pub const ENV_CONFIG_PATH: &str = "IIOT_CONFIG_PATH";
