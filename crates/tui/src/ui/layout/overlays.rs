//! Header dropdowns: notification panel and gateway selector.

use gateway_client::models::{GatewayChoice, Notification};
use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::app::HEADER_HEIGHT;
use crate::ui::theme::{StatusStyle, ThemeExt};

const PANEL_WIDTH: u16 = 52;
const MENU_WIDTH: u16 = 32;

pub struct NotificationsConfig<'a> {
    pub notifications: &'a [Notification],
    pub cursor: usize,
    pub theme: &'a Theme,
}

pub struct GatewayMenuConfig<'a> {
    pub gateways: &'a [GatewayChoice],
    pub cursor: usize,
    pub theme: &'a Theme,
}

/// Dropdown rect hanging below the header, clipped to `area`.
fn dropdown(area: Rect, width: u16, rows: usize, align_right: bool) -> Rect {
    let width = width.min(area.width);
    let height = (rows as u16 + 2).min(area.height.saturating_sub(HEADER_HEIGHT));
    let x = if align_right {
        area.x + area.width.saturating_sub(width + 1)
    } else {
        area.x + 1
    };
    Rect {
        x,
        y: area.y + HEADER_HEIGHT,
        width,
        height,
    }
}

pub fn render_notifications(f: &mut Frame, area: Rect, config: NotificationsConfig) {
    let NotificationsConfig {
        notifications,
        cursor,
        theme,
    } = config;

    let rect = dropdown(area, PANEL_WIDTH, notifications.len() + 1, true);
    let mut items: Vec<ListItem> = notifications
        .iter()
        .map(|n| {
            let dot = if n.unread {
                Span::styled("● ", theme.info())
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                dot,
                Span::styled(n.message.as_str(), theme.text()),
                Span::styled(format!("  {}", n.time), theme.text_dim()),
            ]))
        })
        .collect();
    items.push(ListItem::new(Span::styled(
        "  View all notifications",
        theme.text_dim(),
    )));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .title(Span::styled(" Notifications ", theme.title())),
        )
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut state);
}

pub fn render_gateway_menu(f: &mut Frame, area: Rect, config: GatewayMenuConfig) {
    let GatewayMenuConfig {
        gateways,
        cursor,
        theme,
    } = config;

    let rect = dropdown(area, MENU_WIDTH, gateways.len(), false);
    let items: Vec<ListItem> = gateways
        .iter()
        .map(|g| {
            let check = if g.current { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(check, theme.success()),
                Span::styled(g.name.as_str(), theme.text()),
                Span::raw(" "),
                Span::styled(g.status.label(), g.status.style_for(theme)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .title(Span::styled(" Select Gateway ", theme.title())),
        )
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut state);
}
