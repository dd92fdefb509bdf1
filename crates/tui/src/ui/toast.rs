//! Toast notifications for transient feedback.
//!
//! Toasts are stacked in the bottom-right corner above the footer. Each has
//! a unique id, a level, and a time-to-live after which `App` prunes it on
//! the next tick.

use std::time::{Duration, Instant};

use gateway_config::Theme;
use gateway_config::constants::DEFAULT_TOAST_TTL_SECS;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Errors stay twice as long as everything else.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => {
                Duration::from_secs(DEFAULT_TOAST_TTL_SECS)
            }
            Self::Error => Duration::from_secs(DEFAULT_TOAST_TTL_SECS * 2),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts shown at once; older ones wait off-screen.
const MAX_TOASTS: usize = 4;
const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 48;

/// Render the most recent non-expired toasts.
///
/// Nothing is drawn when the terminal is too small to fit the stack.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 1),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len()).collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.message.as_str(), Style::default().fg(theme.text)),
    ]);

    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_error_ttl_is_longer() {
        assert!(ToastLevel::Error.ttl() > ToastLevel::Info.ttl());
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Toast::success("Device added");
        assert!(!toast.is_expired());
        assert_eq!(toast.level, ToastLevel::Success);
    }

    #[test]
    fn test_zero_ttl_toast_is_expired() {
        let mut toast = Toast::info("gone");
        toast.ttl = Duration::ZERO;
        assert!(toast.is_expired());
    }

    #[test]
    fn test_render_shows_latest_toasts() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let toasts: Vec<Toast> = (0..6).map(|i| Toast::info(format!("message-{i}"))).collect();
        terminal
            .draw(|f| render_toasts(f, &toasts, &Theme::default()))
            .unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("message-5"));
        assert!(content.contains("message-2"));
        assert!(!content.contains("message-1"));
    }

    #[test]
    fn test_render_skipped_on_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let toasts = vec![Toast::error("hidden")];
        terminal
            .draw(|f| render_toasts(f, &toasts, &Theme::default()))
            .unwrap();
        assert!(!buffer_text(&terminal).contains("hidden"));
    }
}
