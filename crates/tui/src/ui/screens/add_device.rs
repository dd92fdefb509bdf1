//! Add-device form screen.

use gateway_client::{AddDeviceForm, FormField};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::ThemeExt;

pub fn render_add_device(f: &mut Frame, area: Rect, form: &mut AddDeviceForm, ctx: ScreenContext) {
    let theme = ctx.theme;
    let focused = form.focused();
    let mut lines = Vec::with_capacity(FormField::ALL.len() * 2 + 2);

    for field in FormField::ALL {
        let is_focused = ctx.focused && field == focused;
        let marker = if field.is_required() { "*" } else { " " };
        let label_style = if is_focused {
            theme.title()
        } else {
            theme.text_dim()
        };
        let value = form.value(field);
        let value_span = if field.is_select() {
            Span::styled(
                format!("◂ {value} ▸"),
                if is_focused { theme.highlight() } else { theme.text() },
            )
        } else if value.is_empty() {
            Span::styled(field.placeholder(), theme.disabled())
        } else {
            Span::styled(
                value.to_string(),
                if is_focused { theme.highlight() } else { theme.text() },
            )
        };
        lines.push(Line::from(vec![
            Span::styled(if is_focused { "› " } else { "  " }, theme.title()),
            Span::styled(format!("{:<22}", field.label()), label_style),
            Span::styled(marker, theme.error()),
            Span::raw(" "),
            value_span,
        ]));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter: Add Device   Esc: Cancel",
        theme.text_dim(),
    )));

    f.render_widget(
        Paragraph::new(lines).block(page_block(ctx.title, &ctx)),
        area,
    );
}
