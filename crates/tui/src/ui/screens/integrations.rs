//! Integrations screen.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::IntegrationsPage;
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};

pub fn render_integrations(
    f: &mut Frame,
    area: Rect,
    page: &mut IntegrationsPage,
    ctx: ScreenContext,
) {
    let theme = ctx.theme;
    let rows: Vec<Row> = page
        .integrations
        .iter()
        .map(|i| {
            Row::new(vec![
                Cell::from(i.name.as_str()),
                Cell::from(i.kind.label()),
                Cell::from(Span::styled(i.status.label(), i.status.style_for(theme))),
                Cell::from(i.metric.to_string()),
                Cell::from(i.description.as_str()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(22),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(["Integration", "Type", "Status", "Throughput", "Description"])
            .style(theme.table_header()),
    )
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, area, &mut page.table);
}
