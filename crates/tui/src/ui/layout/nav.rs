//! Navigation pane: the desktop sidebar and the mobile drawer draw the same
//! flattened rows.

use gateway_client::{NavRow, NavRowKind};
use gateway_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::app::DRAWER_WIDTH;
use crate::ui::theme::ThemeExt;

pub struct NavPaneConfig<'a> {
    pub title: &'a str,
    pub rows: &'a [NavRow<'a>],
    pub cursor: usize,
    pub focused: bool,
    /// Icons only (collapsed sidebar).
    pub compact: bool,
    pub theme: &'a Theme,
}

fn row_line<'a>(row: &NavRow<'a>, compact: bool, theme: &Theme) -> Line<'a> {
    let icon = row.icon.map_or(" ", |i| i.glyph());
    if compact {
        return Line::from(Span::styled(format!(" {icon}"), theme.text()));
    }
    let indent = "  ".repeat(usize::from(row.depth));
    let marker = match row.kind {
        NavRowKind::Group { expanded: true } => " ▾",
        NavRowKind::Group { expanded: false } => " ▸",
        NavRowKind::Link { .. } => "",
    };
    let style = if row.is_active() {
        theme.nav_active()
    } else if row.footer {
        theme.text_dim()
    } else {
        theme.text()
    };
    Line::from(vec![
        Span::raw(indent),
        Span::styled(format!("{icon} "), theme.text_dim()),
        Span::styled(row.name, style),
        Span::styled(marker, theme.text_dim()),
    ])
}

pub fn render_nav_pane(f: &mut Frame, area: Rect, config: NavPaneConfig) {
    let NavPaneConfig {
        title,
        rows,
        cursor,
        focused,
        compact,
        theme,
    } = config;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, compact, theme)))
        .collect();

    let border = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };
    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if !compact {
        block = block.title(Span::styled(title, theme.title()));
    }

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if focused {
        list = list.highlight_style(theme.highlight());
        state.select(Some(cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Draw the navigation pane as an overlay on the left edge of `area`.
pub fn render_drawer(f: &mut Frame, area: Rect, config: NavPaneConfig) {
    let drawer = Rect {
        width: DRAWER_WIDTH.min(area.width),
        ..area
    };
    f.render_widget(Clear, drawer);
    render_nav_pane(f, drawer, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::{ExpandState, NavTree, visible_rows};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(compact: bool) -> String {
        let tree = NavTree::sidebar();
        let expand = ExpandState::for_tree(&tree);
        let rows = visible_rows(&tree, &expand, compact, "/devices");
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(30, 24)).unwrap();
        terminal
            .draw(|f| {
                render_nav_pane(
                    f,
                    f.area(),
                    NavPaneConfig {
                        title: "Navigation",
                        rows: &rows,
                        cursor: 0,
                        focused: true,
                        compact,
                        theme: &theme,
                    },
                )
            })
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
    fn test_expanded_sidebar_shows_group_children() {
        let content = draw(false);
        assert!(content.contains("Device Management"));
        assert!(content.contains("Discovery"));
    }

    #[test]
    fn test_compact_sidebar_hides_names() {
        let content = draw(true);
        assert!(!content.contains("Dashboard"));
    }
}
