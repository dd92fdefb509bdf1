//! Alarms & events screen.

use gateway_client::models::AlarmSeverity;
use gateway_client::{FilterCategory, count_where};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::AlarmsPage;
use crate::ui::screens::{ScreenContext, list_layout, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};
use crate::ui::widgets::{
    SearchBarConfig, SummaryTile, render_empty_state, render_search_bar, render_summary_tiles,
};

pub fn render_alarms(f: &mut Frame, area: Rect, page: &mut AlarmsPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, search_area, table_area] = list_layout(area);

    // Tiles count the unfiltered list.
    let records = &page.list.records;
    let tiles = [
        SummaryTile::new(
            "Critical",
            count_where(records, |a| a.severity == AlarmSeverity::Critical),
            theme.error(),
        ),
        SummaryTile::new(
            "Unacknowledged",
            count_where(records, |a| !a.acknowledged),
            theme.warning(),
        ),
        SummaryTile::new(
            "Acknowledged",
            count_where(records, |a| a.acknowledged),
            theme.success(),
        ),
        SummaryTile::new("Total", records.len(), theme.text()),
    ];
    render_summary_tiles(f, tiles_area, &tiles, theme);

    render_search_bar(
        f,
        search_area,
        SearchBarConfig {
            query: page.list.filter.query(),
            placeholder: "Search alarms by device or message...",
            filters: &[
                ("Status", page.list.filter.category().label()),
                ("Severity", page.severity.label()),
            ],
            editing: ctx.searching,
            theme,
        },
    );

    let visible = page.visible();
    if visible.is_empty() {
        render_empty_state(f, table_area, ctx.title, "No alarms match the current filters", theme);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|&i| {
            let a = &page.list.records[i];
            let ack = if a.acknowledged {
                Span::styled("✓ Ack", theme.success())
            } else {
                Span::styled("Active", theme.warning())
            };
            Row::new(vec![
                Cell::from(Span::styled(a.severity.label(), a.severity.style_for(theme))),
                Cell::from(a.device.as_str()),
                Cell::from(a.message.as_str()),
                Cell::from(a.value.as_str()),
                Cell::from(a.threshold.as_str()),
                Cell::from(a.time.as_str()),
                Cell::from(ack),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(20),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(["Severity", "Device", "Message", "Value", "Threshold", "Time", "State"])
            .style(theme.table_header()),
    )
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, table_area, &mut page.list.table);
}
