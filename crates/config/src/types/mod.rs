//! Configuration types.
//!
//! Responsibilities:
//! - Define the resolved runtime `Config`.
//! - Define the user-selectable color themes and their runtime palettes.
//!
//! Does NOT handle:
//! - Loading values (see `loader`) or persisting UI state (see `persistence`).

mod config;
mod theme;

pub use config::Config;
pub use theme::{ColorTheme, Theme};
