//! Data management screen: live data points with quality and trend.

use gateway_client::models::DataQuality;
use gateway_client::{FilterCategory, count_where};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::DataPage;
use crate::ui::screens::{ScreenContext, list_layout, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};
use crate::ui::widgets::{
    SearchBarConfig, SummaryTile, render_empty_state, render_search_bar, render_summary_tiles,
};

pub fn render_data(f: &mut Frame, area: Rect, page: &mut DataPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, search_area, table_area] = list_layout(area);

    let records = &page.records;
    let tiles = [
        SummaryTile::new("Data Points", records.len(), theme.text()),
        SummaryTile::new(
            "Good",
            count_where(records, |p| p.quality == DataQuality::Good),
            theme.success(),
        ),
        SummaryTile::new(
            "Warning",
            count_where(records, |p| p.quality == DataQuality::Warning),
            theme.warning(),
        ),
        SummaryTile::new(
            "Error",
            count_where(records, |p| p.quality == DataQuality::Error),
            theme.error(),
        ),
    ];
    render_summary_tiles(f, tiles_area, &tiles, theme);

    render_search_bar(
        f,
        search_area,
        SearchBarConfig {
            query: page.filter.query(),
            placeholder: "Search data points by name or device...",
            filters: &[("Quality", page.filter.category().label())],
            editing: ctx.searching,
            theme,
        },
    );

    let visible = page.visible();
    if visible.is_empty() {
        render_empty_state(f, table_area, ctx.title, "No data points match the current filters", theme);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|&i| {
            let p = &page.records[i];
            Row::new(vec![
                Cell::from(p.name.as_str()),
                Cell::from(p.device.as_str()),
                Cell::from(p.value.as_str()),
                Cell::from(Span::styled(p.quality.label(), p.quality.style_for(theme))),
                Cell::from(format!("{} {}", p.trend.arrow(), p.trend.label())),
                Cell::from(p.timestamp.as_str()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(20),
        ],
    )
    .header(
        Row::new(["Name", "Device", "Value", "Quality", "Trend", "Timestamp"])
            .style(theme.table_header()),
    )
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, table_area, &mut page.table);
}
