//! One-line search bar with the active category filter.

use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

pub struct SearchBarConfig<'a> {
    pub query: &'a str,
    pub placeholder: &'a str,
    /// `(name, label)` pairs of category filters, e.g. `("Status", "All")`.
    pub filters: &'a [(&'a str, &'a str)],
    /// Whether keystrokes currently go to the query.
    pub editing: bool,
    pub theme: &'a Theme,
}

pub fn render_search_bar(f: &mut Frame, area: Rect, config: SearchBarConfig) {
    let SearchBarConfig {
        query,
        placeholder,
        filters,
        editing,
        theme,
    } = config;

    let mut spans = vec![Span::styled(" / ", theme.title())];
    if query.is_empty() && !editing {
        spans.push(Span::styled(placeholder, theme.text_dim()));
    } else {
        spans.push(Span::styled(query, theme.text()));
        if editing {
            spans.push(Span::styled("▏", theme.title()));
        }
    }
    for (name, label) in filters {
        spans.push(Span::styled("  │ ", theme.border()));
        spans.push(Span::styled(format!("{name}: "), theme.text_dim()));
        spans.push(Span::styled(*label, theme.info()));
    }

    let border = if editing {
        theme.border_focused()
    } else {
        theme.border()
    };
    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(config: SearchBarConfig) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| render_search_bar(f, f.area(), config))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_placeholder_when_idle_and_empty() {
        let theme = Theme::default();
        let content = draw(SearchBarConfig {
            query: "",
            placeholder: "Search devices...",
            filters: &[("Status", "All")],
            editing: false,
            theme: &theme,
        });
        assert!(content.contains("Search devices..."));
        assert!(content.contains("Status: All"));
    }

    #[test]
    fn test_query_replaces_placeholder() {
        let theme = Theme::default();
        let content = draw(SearchBarConfig {
            query: "PLC",
            placeholder: "Search devices...",
            filters: &[],
            editing: true,
            theme: &theme,
        });
        assert!(content.contains("PLC"));
        assert!(!content.contains("Search devices..."));
    }
}
