//! Application state and logic for the console.
//!
//! This module contains the main `App` struct, split across submodules:
//! - `structs`: the `App` struct definition
//! - `core`: construction, persistence, navigation helpers
//! - `actions`: `App::update`, the action handler
//! - `input`: key handling, mapping keys to actions
//! - `render`: the top-level frame layout
//! - `pages`: per-page state
//! - `state`: focus/mode enums and layout constants

mod actions;
mod core;
mod input;
pub mod pages;
mod render;
pub mod state;
mod structs;

pub use pages::Page;
pub use state::{
    DRAWER_WIDTH, FOOTER_HEIGHT, Focus, HEADER_HEIGHT, InputMode, LayoutMode,
    SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH,
};
pub use structs::App;
