//! Terminal state restoration.
//!
//! Responsibilities:
//! - Restore raw mode and the alternate screen on exit, including panics.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants:
//! - Created after terminal setup and held for the whole session.
//! - `Drop` never panics.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal when dropped.
#[derive(Debug, Default)]
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; main() has usually restored the terminal already.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}
