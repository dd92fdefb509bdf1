//! Header bar: gateway selector, connection indicator, notification badge
//! and clock.

use chrono::{DateTime, Local};
use gateway_client::ConnectionStatus;
use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{StatusStyle, ThemeExt, spinner_char};

pub struct HeaderConfig<'a> {
    pub gateway: &'a str,
    pub connection: ConnectionStatus,
    pub unread: usize,
    pub now: DateTime<Local>,
    /// Show the drawer toggle hint (narrow layout).
    pub show_menu_toggle: bool,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

pub fn render_header(f: &mut Frame, area: Rect, config: HeaderConfig) {
    let HeaderConfig {
        gateway,
        connection,
        unread,
        now,
        show_menu_toggle,
        spinner_frame,
        theme,
    } = config;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" IIoT Gateway ", theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(34)]).areas(inner);

    let mut spans = Vec::new();
    if show_menu_toggle {
        spans.push(Span::styled("☰ ", theme.title()));
    }
    spans.push(Span::styled("⛁ ", theme.text_dim()));
    spans.push(Span::styled(gateway, theme.text()));
    spans.push(Span::styled(" ▾", theme.text_dim()));
    spans.push(Span::raw("   "));
    let indicator = match connection {
        ConnectionStatus::Connecting => spinner_char(spinner_frame),
        ConnectionStatus::Online | ConnectionStatus::Offline => '●',
    };
    spans.push(Span::styled(
        format!("{indicator} {}", connection.label()),
        connection.style_for(theme),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), left);

    let badge = if unread > 0 {
        Span::styled(format!("🔔 {unread}"), theme.warning())
    } else {
        Span::styled("🔔", theme.text_dim())
    };
    let clock = Line::from(vec![
        badge,
        Span::raw("  "),
        Span::styled(now.format("%Y-%m-%d %H:%M:%S").to_string(), theme.text()),
    ]);
    f.render_widget(Paragraph::new(clock).alignment(Alignment::Right), right);
}
