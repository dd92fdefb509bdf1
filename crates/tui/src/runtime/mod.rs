//! Runtime components for the console.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading and persistence
//! - Timers spawned for status actions
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `app` and `ui`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks and report back through the
//!   action channel; they never touch `App` directly.

pub mod config;
pub mod side_effects;
pub mod terminal;
