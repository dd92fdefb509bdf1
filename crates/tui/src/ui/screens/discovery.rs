//! Device discovery screen: scan parameters, protocol set, scan status and
//! the found-device table.

use gateway_client::ScanPhase;
use gateway_client::models::Protocol;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::app::pages::{DiscoveryPage, ScanField};
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::{ThemeExt, spinner_char};

pub fn render_discovery(f: &mut Frame, area: Rect, page: &mut DiscoveryPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [config_area, protocols_area, status_area, table_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let fields: Vec<Line> = ScanField::ALL
        .into_iter()
        .map(|field| {
            let editing = page.editing == Some(field);
            let value_style = if editing {
                theme.highlight()
            } else {
                theme.text()
            };
            let mut spans = vec![
                Span::styled(format!("{:<14}", field.label()), theme.text_dim()),
                Span::styled(page.field_value(field), value_style),
            ];
            if editing {
                spans.push(Span::styled("▏", theme.title()));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(
        Paragraph::new(fields).block(page_block(ctx.title, &ctx)),
        config_area,
    );

    let selected = &page.scan.config().protocols;
    let toggles: Vec<Span> = Protocol::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, protocol)| {
            let mark = if selected.contains(protocol) { "x" } else { " " };
            let style = if selected.contains(protocol) {
                theme.success()
            } else {
                theme.text()
            };
            [
                Span::styled(format!("{}", i + 1), theme.text_dim()),
                Span::styled(format!(" [{mark}] {}   ", protocol.label()), style),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(toggles))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(page_block("Protocols", &ctx)),
        protocols_area,
    );

    let status = match page.scan.phase() {
        ScanPhase::Scanning => Line::from(vec![
            Span::styled(format!(" {} ", spinner_char(ctx.spinner_frame)), theme.info()),
            Span::styled("Scanning network...", theme.info()),
            Span::styled("  (Esc to cancel)", theme.text_dim()),
        ]),
        ScanPhase::Idle => Line::from(vec![
            Span::styled(" Ready. ", theme.text()),
            Span::styled("Enter to start scan", theme.text_dim()),
        ]),
    };
    f.render_widget(Paragraph::new(status), status_area);

    let selected_count = page.scan.selected_count();
    let rows: Vec<Row> = page
        .scan
        .devices()
        .iter()
        .map(|d| {
            let mark = if d.selected { "[x]" } else { "[ ]" };
            Row::new(vec![
                Cell::from(mark),
                Cell::from(d.ip.as_str()),
                Cell::from(d.protocol.label()),
                Cell::from(d.device_type.label()),
            ])
        })
        .collect();
    let title = format!("Discovered Devices  ·  Add Selected ({selected_count})");
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(["", "IP Address", "Protocol", "Type"]).style(theme.table_header()))
    .block(page_block(&title, &ctx))
    .row_highlight_style(theme.highlight());
    let mut state = TableState::default().with_selected(Some(page.cursor));
    f.render_stateful_widget(table, table_area, &mut state);
}
