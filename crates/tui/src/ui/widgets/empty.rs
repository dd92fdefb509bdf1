//! Empty state widget, shown when a filter leaves nothing to list.

use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Render a bordered placeholder with a centered message.
///
/// ```rust,ignore
/// render_empty_state(f, area, "Devices", "No devices match 'xyz'", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_empty_state() {
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| {
                render_empty_state(f, f.area(), "Alarms", "No alarms match", &Theme::default())
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Alarms"));
        assert!(content.contains("No alarms match"));
    }
}
