//! Application state types and layout constants.
//!
//! Responsibilities:
//! - Define focus and input-mode enums.
//! - Define layout constants shared by rendering and toasts.
//!
//! Does NOT handle:
//! - State mutations (in the `App` impl).
//! - Per-page state (see `pages`).

/// Header height: border + gateway/status line + border.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Width of the expanded desktop sidebar.
pub const SIDEBAR_WIDTH: u16 = 26;
/// Width of the collapsed desktop sidebar (icons only).
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;
/// Width of the mobile drawer overlay.
pub const DRAWER_WIDTH: u16 = 34;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}

/// Whether printable keys are commands or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the current page's search query.
    Search,
    /// Typing into a discovery scan parameter.
    EditScanField,
}

/// Shell layout chosen from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sidebar beside the content.
    Desktop,
    /// No sidebar; navigation through the drawer.
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}
