//! Row of summary tiles (count + label) shown above list pages.

use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

pub struct SummaryTile<'a> {
    pub label: &'a str,
    pub value: String,
    pub style: Style,
}

impl<'a> SummaryTile<'a> {
    pub fn new(label: &'a str, value: impl ToString, style: Style) -> Self {
        Self {
            label,
            value: value.to_string(),
            style,
        }
    }
}

/// Split `area` evenly across `tiles`, each a 3-row bordered box.
pub fn render_summary_tiles(f: &mut Frame, area: Rect, tiles: &[SummaryTile], theme: &Theme) {
    if tiles.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            std::iter::repeat_n(Constraint::Ratio(1, tiles.len() as u32), tiles.len())
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (tile, chunk) in tiles.iter().zip(chunks.iter()) {
        let line = Line::from(vec![
            Span::styled(tile.value.as_str(), tile.style),
            Span::raw(" "),
            Span::styled(tile.label, theme.text_dim()),
        ]);
        let widget = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
        f.render_widget(widget, *chunk);
    }
}
