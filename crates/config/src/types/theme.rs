//! Theme types for the console.
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime palette.
//! - `Theme` is not serializable. Persist `ColorTheme` and expand on startup.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Neon,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Neon,
        ColorTheme::Light,
        ColorTheme::Dark,
        ColorTheme::HighContrast,
        ColorTheme::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Neon => "Neon",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (Settings page "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Neon => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Neon,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tables
    pub table_header_fg: Color,
    pub table_header_bg: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Neon => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::LightCyan,
                accent: Color::Rgb(255, 200, 0),
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::LightBlue,
                disabled: Color::DarkGray,
                table_header_fg: Color::Cyan,
                table_header_bg: Color::Indexed(236),
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::Gray,
                text_dim: Color::DarkGray,
                border: Color::DarkGray,
                title: Color::White,
                accent: Color::Yellow,
                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::LightRed,
                info: Color::Cyan,
                disabled: Color::DarkGray,
                table_header_fg: Color::White,
                table_header_bg: Color::DarkGray,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::White,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                success: Color::White,
                warning: Color::Gray,
                error: Color::Reset,
                info: Color::Gray,
                disabled: Color::DarkGray,
                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = ColorTheme::default();
        let mut seen = vec![theme];
        for _ in 1..ColorTheme::ALL.len() {
            theme = theme.cycle_next();
            seen.push(theme);
        }
        assert_eq!(seen, ColorTheme::ALL.to_vec());
        assert_eq!(theme.cycle_next(), ColorTheme::Neon);
    }

    #[test]
    fn test_color_theme_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ColorTheme::HighContrast).unwrap(),
            "\"high_contrast\""
        );
        let parsed: ColorTheme = serde_json::from_str("\"monochrome\"").unwrap();
        assert_eq!(parsed, ColorTheme::Monochrome);
    }

    #[test]
    fn test_all_themes_convertible() {
        for theme in ColorTheme::ALL {
            let runtime = Theme::from_color_theme(theme);
            assert_ne!(runtime.background, runtime.text);
            assert_ne!(runtime.highlight_fg, runtime.highlight_bg);
        }
    }
}
