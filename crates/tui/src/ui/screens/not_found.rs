//! Not-found page for dead navigation links.

use gateway_client::navigation::NOT_FOUND_LINKS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::app::pages::NotFoundPage;
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::ThemeExt;

pub fn render_not_found(f: &mut Frame, area: Rect, page: &mut NotFoundPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let block = page_block(ctx.title, &ctx);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [message_area, links_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(inner);

    let message = vec![
        Line::from(Span::styled("404", theme.title())),
        Line::from(Span::styled(
            format!("Nothing lives at {}", page.path),
            theme.text(),
        )),
        Line::from(Span::styled(
            "This section is not available yet. Try one of these instead:",
            theme.text_dim(),
        )),
    ];
    f.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        message_area,
    );

    let items: Vec<ListItem> = NOT_FOUND_LINKS
        .iter()
        .map(|(label, path)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {label:<12}"), theme.text()),
                Span::styled(*path, theme.text_dim()),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(Some(page.cursor));
    f.render_stateful_widget(list, links_area, &mut state);
}
