//! Per-page rendering.
//!
//! Each screen module exposes a `render_*` function taking its page state
//! and a [`ScreenContext`]. `render_page` picks the screen for the current
//! `Page`.

pub mod add_device;
pub mod alarms;
pub mod dashboard;
pub mod data;
pub mod devices;
pub mod discovery;
pub mod integrations;
pub mod not_found;
pub mod protocols;
pub mod reports;
pub mod settings;
pub mod users;

use gateway_config::{ColorTheme, Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders},
};

use crate::app::Page;
use crate::ui::theme::ThemeExt;

/// What every screen needs besides its own page state.
#[derive(Clone, Copy)]
pub struct ScreenContext<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    /// Keystrokes currently go to the page's search query.
    pub searching: bool,
    /// Content pane has focus.
    pub focused: bool,
    pub spinner_frame: u8,
    pub color_theme: ColorTheme,
}

/// Render the current page into `area`.
pub fn render_page(f: &mut Frame, area: Rect, page: &mut Page, ctx: ScreenContext) {
    match page {
        Page::Dashboard(state) => dashboard::render_dashboard(f, area, state, ctx),
        Page::Devices(state) => devices::render_devices(f, area, state, ctx),
        Page::AddDevice(form) => add_device::render_add_device(f, area, form, ctx),
        Page::Discovery(state) => discovery::render_discovery(f, area, state, ctx),
        Page::Alarms(state) => alarms::render_alarms(f, area, state, ctx),
        Page::Data(state) => data::render_data(f, area, state, ctx),
        Page::Protocols(state) => protocols::render_protocols(f, area, state, ctx),
        Page::Reports(state) => reports::render_reports(f, area, state, ctx),
        Page::Integrations(state) => integrations::render_integrations(f, area, state, ctx),
        Page::Users(state) => users::render_users(f, area, state, ctx),
        Page::Settings(state) => settings::render_settings(f, area, state, ctx),
        Page::NotFound(state) => not_found::render_not_found(f, area, state, ctx),
    }
}

/// Bordered block titled with the page name.
pub(crate) fn page_block<'a>(title: &'a str, ctx: &ScreenContext) -> Block<'a> {
    let border = if ctx.focused {
        ctx.theme.border_focused()
    } else {
        ctx.theme.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {title} "), ctx.theme.title()))
}

/// Split a list page into summary tiles, search bar and table.
pub(crate) fn list_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area)
}
