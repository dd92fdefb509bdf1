//! Footer with key hints for the current context.

use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Render `(key, description)` hints on one line.
pub fn render_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.border()));
        }
        spans.push(Span::styled(*key, theme.title()));
        spans.push(Span::styled(format!(" {description}"), theme.text_dim()));
    }
    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    f.render_widget(footer, area);
}
