//! Core App lifecycle methods.
//!
//! Responsibilities:
//! - App construction from resolved config and persisted state.
//! - State persistence (`get_persisted_state`).
//! - Navigation and the derived views the renderer and input handler share
//!   (visible navigation rows, layout mode, unread count).
//!
//! Does NOT handle:
//! - Does NOT handle action dispatch (see `actions`).
//! - Does NOT handle input (see `input`).
//! - Does NOT render (see `render`).

use chrono::Local;
use gateway_client::{
    ConnectionMonitor, ExpandState, NavRow, NavTree, Route, SidebarState, fixtures, visible_rows,
};
use gateway_config::{Config, PersistedState, Theme};
use ratatui::layout::Rect;
use tracing::info;

use crate::action::Action;
use crate::app::pages::Page;
use crate::app::state::{Focus, InputMode, LayoutMode};
use crate::app::structs::App;
use crate::ui::Toast;

/// Assumed terminal size before the first frame is drawn.
const INITIAL_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default(), PersistedState::default(), None)
    }
}

impl App {
    /// Create a new App.
    ///
    /// `route` overrides the persisted last route; with neither, the console
    /// opens on the dashboard.
    pub fn new(config: &Config, persisted: PersistedState, route: Option<Route>) -> Self {
        let route = route
            .or_else(|| persisted.last_route.as_deref().map(Route::from_path))
            .unwrap_or_default();

        let sidebar_tree = NavTree::sidebar();
        let sidebar = SidebarState::new(&sidebar_tree).with_collapsed(persisted.sidebar_collapsed);
        let mobile_tree = NavTree::mobile();
        let mobile_expand = ExpandState::for_tree(&mobile_tree);

        let mut gateways = fixtures::gateways();
        if let Some(pos) = gateways.iter().position(|g| g.name == config.gateway_name) {
            for (i, gateway) in gateways.iter_mut().enumerate() {
                gateway.current = i == pos;
            }
        } else if let Some(current) = gateways.iter_mut().find(|g| g.current) {
            current.name = config.gateway_name.clone();
        }

        let mut app = Self {
            page: Page::for_route(&route),
            route,
            page_epoch: 0,
            focus: Focus::default(),
            input_mode: InputMode::default(),
            sidebar_tree,
            sidebar,
            sidebar_cursor: 0,
            mobile_tree,
            mobile_expand,
            mobile_cursor: 0,
            drawer_open: false,
            notifications: fixtures::notifications(),
            notifications_open: false,
            notifications_cursor: 0,
            gateways,
            gateway_menu: None,
            connection: ConnectionMonitor::new(),
            now: Local::now(),
            color_theme: persisted.selected_theme,
            theme: Theme::from_color_theme(persisted.selected_theme),
            toasts: Vec::new(),
            spinner_frame: 0,
            last_area: INITIAL_AREA,
            mobile_breakpoint: config.mobile_breakpoint,
            scan_duration: config.scan_duration,
            followup: None,
        };
        app.sync_sidebar_cursor();
        app
    }

    /// State saved on quit and by the auto-save timer.
    ///
    /// The not-found page is never persisted as the last route.
    pub fn get_persisted_state(&self) -> PersistedState {
        PersistedState {
            selected_theme: self.color_theme,
            sidebar_collapsed: self.sidebar.is_collapsed(),
            last_route: (!self.route.is_not_found()).then(|| self.route.path().to_string()),
        }
    }

    /// Take the follow-up action queued by the last `update`, if any.
    pub fn take_followup(&mut self) -> Option<Action> {
        self.followup.take()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.last_area.width, self.mobile_breakpoint)
    }

    /// Name of the gateway marked current in the selector.
    pub fn current_gateway(&self) -> &str {
        self.gateways
            .iter()
            .find(|g| g.current)
            .map_or("", |g| g.name.as_str())
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }

    /// Rows of the desktop sidebar as currently displayed.
    pub fn sidebar_rows(&self) -> Vec<NavRow<'_>> {
        visible_rows(
            &self.sidebar_tree,
            self.sidebar.expand_state(),
            self.sidebar.is_collapsed(),
            self.route.path(),
        )
    }

    /// Rows of the mobile drawer as currently displayed.
    pub fn drawer_rows(&self) -> Vec<NavRow<'_>> {
        visible_rows(&self.mobile_tree, &self.mobile_expand, false, self.route.path())
    }

    pub(crate) fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Replace the current page with fresh state for `path`.
    ///
    /// A running discovery scan is cancelled, the drawer closes, and any
    /// in-progress text entry ends.
    pub(crate) fn navigate(&mut self, path: &str) {
        let route = Route::from_path(path);
        if let Page::Discovery(discovery) = &mut self.page {
            discovery.cancel_scan();
        }
        self.page_epoch += 1;
        self.page = Page::for_route(&route);
        info!(path = route.path(), not_found = route.is_not_found(), "Navigated");
        self.route = route;
        self.input_mode = InputMode::Normal;
        self.drawer_open = false;
        self.sync_sidebar_cursor();
    }

    /// Put the sidebar cursor on the active row, or keep it in range when no
    /// visible row is active.
    pub(crate) fn sync_sidebar_cursor(&mut self) {
        let rows = self.sidebar_rows();
        let len = rows.len();
        if let Some(pos) = rows.iter().position(|row| row.is_active()) {
            self.sidebar_cursor = pos;
        } else if self.sidebar_cursor >= len {
            self.sidebar_cursor = len.saturating_sub(1);
        }
    }
}
