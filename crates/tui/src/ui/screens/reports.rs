//! Reports & analytics screen: recent reports and report templates.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::ReportsPage;
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::ThemeExt;

pub fn render_reports(f: &mut Frame, area: Rect, page: &mut ReportsPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let templates_height = page.templates.len() as u16 + 3;
    let [reports_area, templates_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(templates_height)]).areas(area);

    let rows: Vec<Row> = page
        .reports
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.name.as_str()),
                Cell::from(r.report_type.as_str()),
                Cell::from(r.date.as_str()),
                Cell::from(r.size.as_str()),
                Cell::from(Span::styled(r.format.label(), theme.info())),
            ])
        })
        .collect();
    let reports = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(["Report", "Type", "Date", "Size", "Format"]).style(theme.table_header()))
    .block(page_block(ctx.title, &ctx))
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(reports, reports_area, &mut page.table);

    let template_rows: Vec<Row> = page
        .templates
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.name.as_str()),
                Cell::from(t.description.as_str()),
                Cell::from(Span::styled(t.frequency.label(), theme.text_dim())),
            ])
        })
        .collect();
    let templates = Table::new(
        template_rows,
        [Constraint::Length(24), Constraint::Min(20), Constraint::Length(8)],
    )
    .header(Row::new(["Template", "Description", "Schedule"]).style(theme.table_header()))
    .block(page_block("Report Templates", &ctx));
    f.render_widget(templates, templates_area);
}
