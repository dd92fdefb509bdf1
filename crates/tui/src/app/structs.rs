//! The `App` struct.

use std::time::Duration;

use chrono::{DateTime, Local};
use gateway_client::models::{GatewayChoice, Notification};
use gateway_client::{ConnectionMonitor, ExpandState, NavTree, Route, SidebarState};
use gateway_config::{ColorTheme, Theme};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::pages::Page;
use crate::app::state::{Focus, InputMode};
use crate::ui::Toast;

/// Main application state.
///
/// Everything the console draws is derived from this struct. Mutation goes
/// through `update` (actions) and `handle_input` (keys → actions).
pub struct App {
    // Routing
    pub route: Route,
    pub page: Page,
    /// Incremented on every navigation; tags timer results with the page
    /// instance that started them.
    pub page_epoch: u64,

    // Focus / modes
    pub focus: Focus,
    pub input_mode: InputMode,

    // Desktop sidebar
    pub sidebar_tree: NavTree,
    pub sidebar: SidebarState,
    pub sidebar_cursor: usize,

    // Mobile drawer
    pub mobile_tree: NavTree,
    pub mobile_expand: ExpandState,
    pub mobile_cursor: usize,
    pub drawer_open: bool,

    // Header
    pub notifications: Vec<Notification>,
    pub notifications_open: bool,
    pub notifications_cursor: usize,
    pub gateways: Vec<GatewayChoice>,
    /// Cursor of the open gateway selector, `None` when closed.
    pub gateway_menu: Option<usize>,
    pub connection: ConnectionMonitor,
    pub now: DateTime<Local>,

    // Appearance
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,

    // Layout
    pub last_area: Rect,
    pub mobile_breakpoint: u16,

    pub scan_duration: Duration,

    /// Action to run after the current `update`, drained by the event loop.
    pub(crate) followup: Option<Action>,
}
