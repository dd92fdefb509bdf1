//! UI rendering modules for the console.
//!
//! Rendering is separated from state: every function here takes borrowed
//! state (usually a `*RenderConfig`) and draws into a `Frame`.

pub mod layout;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
