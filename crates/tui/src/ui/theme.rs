//! TUI-specific theme helpers and style builders.
//!
//! Extends `gateway_config::Theme` with helpers for building ratatui
//! `Style`s, and maps domain states (link status, severity, quality) onto
//! the palette so every screen colors them the same way.

use gateway_client::models::{AccountStatus, AlarmSeverity, DataQuality, GatewayStatus, LinkStatus};
use gateway_client::ConnectionStatus;
use gateway_config::Theme;
use ratatui::style::{Modifier, Style};

/// Braille spinner frames for animated indicators.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner character for a given animation frame.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Accent + bold.
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    fn table_header(&self) -> Style;
    /// Style for the active navigation row.
    fn nav_active(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn nav_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

/// Palette lookups for domain states.
pub trait StatusStyle {
    fn style_for(&self, theme: &Theme) -> Style;
}

impl StatusStyle for LinkStatus {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            LinkStatus::Online => theme.success(),
            LinkStatus::Warning => theme.warning(),
            LinkStatus::Offline => theme.error(),
        }
    }
}

impl StatusStyle for GatewayStatus {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            GatewayStatus::Online => theme.success(),
            GatewayStatus::Warning => theme.warning(),
            GatewayStatus::Offline => theme.error(),
            GatewayStatus::Connecting => theme.info(),
        }
    }
}

impl StatusStyle for AlarmSeverity {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            AlarmSeverity::Critical => theme.error().add_modifier(Modifier::BOLD),
            AlarmSeverity::High => theme.error(),
            AlarmSeverity::Medium => theme.warning(),
            AlarmSeverity::Low => theme.info(),
            AlarmSeverity::Info => theme.text_dim(),
        }
    }
}

impl StatusStyle for DataQuality {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            DataQuality::Good => theme.success(),
            DataQuality::Warning => theme.warning(),
            DataQuality::Error => theme.error(),
        }
    }
}

impl StatusStyle for AccountStatus {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            AccountStatus::Active => theme.success(),
            AccountStatus::Inactive => theme.disabled(),
        }
    }
}

impl StatusStyle for ConnectionStatus {
    fn style_for(&self, theme: &Theme) -> Style {
        match self {
            ConnectionStatus::Connecting => theme.info().add_modifier(Modifier::SLOW_BLINK),
            ConnectionStatus::Online => theme.success(),
            ConnectionStatus::Offline => theme.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_config::ColorTheme;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), spinner_char(8));
        assert_ne!(spinner_char(0), spinner_char(1));
    }

    #[test]
    fn test_offline_and_online_differ_in_every_theme() {
        for color_theme in ColorTheme::ALL {
            let theme = Theme::from_color_theme(color_theme);
            if color_theme == ColorTheme::Monochrome {
                continue;
            }
            assert_ne!(
                LinkStatus::Online.style_for(&theme),
                LinkStatus::Offline.style_for(&theme),
                "{color_theme}"
            );
        }
    }
}
