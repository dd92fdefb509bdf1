//! Dashboard: headline metrics, gateway nodes and recent alarms.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

use crate::app::pages::DashboardPage;
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};

pub fn render_dashboard(f: &mut Frame, area: Rect, page: &mut DashboardPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, body] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    if !page.tiles.is_empty() {
        let count = page.tiles.len() as u32;
        let chunks = Layout::horizontal(
            page.tiles
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(tiles_area);
        for (tile, chunk) in page.tiles.iter().zip(chunks.iter()) {
            let change_style = if tile.is_decrease() {
                theme.error()
            } else {
                theme.success()
            };
            let text = vec![
                Line::from(Span::styled(tile.value.as_str(), theme.title())),
                Line::from(vec![
                    Span::styled(tile.change.as_str(), change_style),
                    Span::styled(" from last hour", theme.text_dim()),
                ]),
            ];
            let widget = Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(Span::styled(tile.name.as_str(), theme.text_dim())),
            );
            f.render_widget(widget, *chunk);
        }
    }

    let [nodes_area, alarms_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    let node_rows: Vec<Row> = page
        .nodes
        .iter()
        .map(|n| {
            Row::new(vec![
                Cell::from(n.name.as_str()),
                Cell::from(Span::styled(n.status.label(), n.status.style_for(theme))),
                Cell::from(n.devices.to_string()),
                Cell::from(n.uptime.as_str()),
                Cell::from(n.latency.as_str()),
            ])
        })
        .collect();
    let nodes = Table::new(
        node_rows,
        [
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(["Gateway", "Status", "Devices", "Uptime", "Latency"]).style(theme.table_header()),
    )
    .block(page_block("Gateway Status", &ctx));
    f.render_widget(nodes, nodes_area);

    let alarm_items: Vec<ListItem> = page
        .recent_alarms
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<9}", a.severity.label()), a.severity.style_for(theme)),
                    Span::styled(a.device.as_str(), theme.text()),
                    Span::styled(format!("  {}", a.time), theme.text_dim()),
                ]),
                Line::from(Span::styled(format!("         {}", a.message), theme.text_dim())),
            ])
        })
        .collect();
    let alarms = List::new(alarm_items).block(page_block("Recent Alarms", &ctx));
    f.render_widget(alarms, alarms_area);
}
