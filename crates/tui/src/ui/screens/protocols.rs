//! Protocol configuration screen: driver templates with an enabled switch.

use gateway_client::{FilterCategory, count_where};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::ProtocolsPage;
use crate::ui::screens::{ScreenContext, list_layout, page_block};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{
    SearchBarConfig, SummaryTile, render_empty_state, render_search_bar, render_summary_tiles,
};

pub fn render_protocols(f: &mut Frame, area: Rect, page: &mut ProtocolsPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, search_area, table_area] = list_layout(area);

    let records = &page.records;
    let devices: u32 = records.iter().map(|t| t.devices).sum();
    let tiles = [
        SummaryTile::new("Templates", records.len(), theme.text()),
        SummaryTile::new("Enabled", count_where(records, |t| t.enabled), theme.success()),
        SummaryTile::new("Devices", devices, theme.info()),
    ];
    render_summary_tiles(f, tiles_area, &tiles, theme);

    render_search_bar(
        f,
        search_area,
        SearchBarConfig {
            query: page.filter.query(),
            placeholder: "Search templates by name or protocol...",
            filters: &[("Enabled", page.filter.category().label())],
            editing: ctx.searching,
            theme,
        },
    );

    let visible = page.visible();
    if visible.is_empty() {
        render_empty_state(f, table_area, ctx.title, "No templates match the current filters", theme);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|&i| {
            let t = &page.records[i];
            let switch = if t.enabled {
                Span::styled("[on] ", theme.success())
            } else {
                Span::styled("[off]", theme.disabled())
            };
            Row::new(vec![
                Cell::from(switch),
                Cell::from(t.name.as_str()),
                Cell::from(t.protocol.label()),
                Cell::from(t.devices.to_string()),
                Cell::from(t.description.as_str()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Length(11),
            Constraint::Length(8),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(["", "Template", "Protocol", "Devices", "Description"])
            .style(theme.table_header()),
    )
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, table_area, &mut page.table);
}
