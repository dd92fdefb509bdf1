//! Shared UI widgets for common rendering patterns.

pub mod empty;
pub mod search_bar;
pub mod summary;

pub use empty::render_empty_state;
pub use search_bar::{SearchBarConfig, render_search_bar};
pub use summary::{SummaryTile, render_summary_tiles};
