use std::time::Duration;

use crate::constants::{
    DEFAULT_CONNECT_DELAY_MS, DEFAULT_GATEWAY_NAME, DEFAULT_MOBILE_BREAKPOINT,
    DEFAULT_SCAN_DURATION_MS, DEFAULT_UI_TICK_MS,
};

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gateway name shown in the header selector.
    pub gateway_name: String,
    /// Delay before the header connection indicator reports online.
    pub connect_delay: Duration,
    /// How long a discovery scan runs.
    pub scan_duration: Duration,
    /// Animation/redraw tick.
    pub ui_tick: Duration,
    /// Terminal width below which the mobile drawer is used.
    pub mobile_breakpoint: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_name: DEFAULT_GATEWAY_NAME.to_string(),
            connect_delay: Duration::from_millis(DEFAULT_CONNECT_DELAY_MS),
            scan_duration: Duration::from_millis(DEFAULT_SCAN_DURATION_MS),
            ui_tick: Duration::from_millis(DEFAULT_UI_TICK_MS),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}
