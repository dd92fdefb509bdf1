//! Devices screen: status tiles, search/status filter and the device table.

use gateway_client::models::LinkStatus;
use gateway_client::{FilterCategory, count_where};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::DevicesPage;
use crate::ui::screens::{ScreenContext, list_layout, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};
use crate::ui::widgets::{
    SearchBarConfig, SummaryTile, render_empty_state, render_search_bar, render_summary_tiles,
};

pub fn render_devices(f: &mut Frame, area: Rect, page: &mut DevicesPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, search_area, table_area] = list_layout(area);

    let records = &page.records;
    let tiles = [
        SummaryTile::new("Total", records.len(), theme.text()),
        SummaryTile::new(
            "Online",
            count_where(records, |d| d.status == LinkStatus::Online),
            theme.success(),
        ),
        SummaryTile::new(
            "Warning",
            count_where(records, |d| d.status == LinkStatus::Warning),
            theme.warning(),
        ),
        SummaryTile::new(
            "Offline",
            count_where(records, |d| d.status == LinkStatus::Offline),
            theme.error(),
        ),
    ];
    render_summary_tiles(f, tiles_area, &tiles, theme);

    render_search_bar(
        f,
        search_area,
        SearchBarConfig {
            query: page.filter.query(),
            placeholder: "Search devices by name, type or protocol...",
            filters: &[("Status", page.filter.category().label())],
            editing: ctx.searching,
            theme,
        },
    );

    let visible = page.visible();
    if visible.is_empty() {
        render_empty_state(f, table_area, ctx.title, "No devices match the current filters", theme);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|&i| {
            let d = &page.records[i];
            Row::new(vec![
                Cell::from(d.name.as_str()),
                Cell::from(d.device_type.label()),
                Cell::from(d.protocol.label()),
                Cell::from(d.ip.as_str()),
                Cell::from(Span::styled(d.status.label(), d.status.style_for(theme))),
                Cell::from(d.gateway.as_str()),
                Cell::from(d.last_seen.as_str()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(15),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(["Name", "Type", "Protocol", "IP Address", "Status", "Gateway", "Last Seen"])
            .style(theme.table_header()),
    )
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, table_area, &mut page.table);
}
