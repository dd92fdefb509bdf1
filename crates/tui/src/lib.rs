//! Terminal console for the IIoT gateway.
//!
//! The binary in `main.rs` owns the terminal and the event loop; everything
//! else lives here so integration tests can drive `App` directly.

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::App;
