//! Rendering logic for the console.
//!
//! Responsibilities:
//! - Lay out the shell (header, navigation, content, footer) for the current
//!   width.
//! - Dispatch to the screen renderer for the current page.
//! - Draw overlays (drawer, header menus, toasts) last so they sit on top.
//!
//! Non-responsibilities:
//! - Does NOT handle input.
//! - Does NOT mutate app state (except `last_area` and table selection).

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::app::pages::Page;
use crate::app::state::{
    FOOTER_HEIGHT, Focus, HEADER_HEIGHT, InputMode, LayoutMode, SIDEBAR_COLLAPSED_WIDTH,
    SIDEBAR_WIDTH,
};
use crate::ui::layout::{
    GatewayMenuConfig, HeaderConfig, NavPaneConfig, NotificationsConfig, render_drawer,
    render_footer, render_gateway_menu, render_header, render_nav_pane, render_notifications,
};
use crate::ui::screens::{ScreenContext, render_page};
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        let mode = self.layout_mode();

        let [header_area, body, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        render_header(
            f,
            header_area,
            HeaderConfig {
                gateway: self.current_gateway(),
                connection: self.connection.status(),
                unread: self.unread_count(),
                now: self.now,
                show_menu_toggle: mode == LayoutMode::Mobile,
                spinner_frame: self.spinner_frame,
                theme: &self.theme,
            },
        );

        let content_area = if mode == LayoutMode::Desktop {
            let collapsed = self.sidebar.is_collapsed();
            let width = if collapsed {
                SIDEBAR_COLLAPSED_WIDTH
            } else {
                SIDEBAR_WIDTH
            };
            let [nav_area, content_area] =
                Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(body);
            let rows = self.sidebar_rows();
            render_nav_pane(
                f,
                nav_area,
                NavPaneConfig {
                    title: "Navigation",
                    rows: &rows,
                    cursor: self.sidebar_cursor,
                    focused: self.focus == Focus::Sidebar,
                    compact: collapsed,
                    theme: &self.theme,
                },
            );
            content_area
        } else {
            body
        };

        let ctx = ScreenContext {
            title: self.route.title(),
            theme: &self.theme,
            searching: self.input_mode == InputMode::Search,
            focused: self.focus == Focus::Content && !self.drawer_open,
            spinner_frame: self.spinner_frame,
            color_theme: self.color_theme,
        };
        render_page(f, content_area, &mut self.page, ctx);

        render_footer(f, footer_area, &self.footer_hints(), &self.theme);

        if self.drawer_open {
            let rows = self.drawer_rows();
            render_drawer(
                f,
                body,
                NavPaneConfig {
                    title: "Menu",
                    rows: &rows,
                    cursor: self.mobile_cursor,
                    focused: true,
                    compact: false,
                    theme: &self.theme,
                },
            );
        }

        if self.notifications_open {
            render_notifications(
                f,
                area,
                NotificationsConfig {
                    notifications: &self.notifications,
                    cursor: self.notifications_cursor,
                    theme: &self.theme,
                },
            );
        }

        if let Some(cursor) = self.gateway_menu {
            render_gateway_menu(
                f,
                area,
                GatewayMenuConfig {
                    gateways: &self.gateways,
                    cursor,
                    theme: &self.theme,
                },
            );
        }

        render_toasts(f, &self.toasts, &self.theme);
    }

    /// Key hints for the footer, most specific state first.
    pub fn footer_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.gateway_menu.is_some() {
            return vec![("j/k", "Move"), ("Enter", "Select"), ("Esc", "Close")];
        }
        if self.notifications_open {
            return vec![("j/k", "Move"), ("Enter", "Mark read"), ("Esc", "Close")];
        }
        if self.drawer_open {
            return vec![("j/k", "Move"), ("Enter", "Open"), ("Esc", "Close")];
        }
        match self.input_mode {
            InputMode::Search => return vec![("Enter/Esc", "Done"), ("Backspace", "Delete")],
            InputMode::EditScanField => {
                return vec![("Enter", "Next field"), ("Esc", "Done")];
            }
            InputMode::Normal => {}
        }

        let mut hints = Vec::new();
        if self.layout_mode() == LayoutMode::Desktop {
            if self.focus == Focus::Sidebar {
                hints.extend([("j/k", "Move"), ("Enter", "Open"), ("Tab", "Content")]);
                hints.extend([("[", "Collapse"), ("q", "Quit")]);
                return hints;
            }
            hints.push(("Tab", "Sidebar"));
        } else {
            hints.push(("m", "Menu"));
        }

        match &self.page {
            Page::Devices(_) => hints.extend([("/", "Search"), ("f", "Filter"), ("a", "Add")]),
            Page::Alarms(_) => hints.extend([
                ("/", "Search"),
                ("f", "Status"),
                ("s", "Severity"),
                ("a", "Acknowledge"),
            ]),
            Page::Data(_) | Page::Users(_) => hints.extend([("/", "Search"), ("f", "Filter")]),
            Page::Protocols(_) => {
                hints.extend([("/", "Search"), ("f", "Filter"), ("Space", "Toggle")])
            }
            Page::Discovery(d) if d.scan.is_scanning() => hints.push(("Esc", "Cancel scan")),
            Page::Discovery(_) => hints.extend([
                ("Enter", "Scan"),
                ("i", "Edit range"),
                ("1-6", "Protocols"),
                ("Space", "Select"),
                ("a", "Add selected"),
            ]),
            Page::AddDevice(_) => {
                return vec![
                    ("↑/↓", "Field"),
                    ("←/→", "Option"),
                    ("Enter", "Add Device"),
                    ("Esc", "Cancel"),
                ];
            }
            Page::Settings(_) => hints.push(("t", "Theme")),
            Page::NotFound(_) => hints.push(("Enter", "Go")),
            Page::Dashboard(_) | Page::Reports(_) | Page::Integrations(_) => {}
        }
        hints.extend([("n", "Alerts"), ("g", "Gateway"), ("q", "Quit")]);
        hints
    }
}
