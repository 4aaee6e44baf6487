//! Theme types for query handler placeholders.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Parse theme names from configuration text.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always persist `ColorTheme`.
//! - Colors are semantically named (error/info) for consistent usage.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::loader::ConfigError;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (used by the demo "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = ConfigError;

    /// Accepts snake_case, kebab-case, or spaced names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            _ => Err(ConfigError::UnknownTheme(s.trim().to_string())),
        }
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Semantics
    pub error: Color,
    pub info: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
            },
            ColorTheme::Light => Self {
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,
                error: Color::Red,
                info: Color::Blue,
            },
            ColorTheme::Dark => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),
                accent: Color::Indexed(214), // orange-ish
                error: Color::Red,
                info: Color::Indexed(110),
            },
            ColorTheme::HighContrast => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
            },
            ColorTheme::Monochrome => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::White,
                error: Color::White,
                info: Color::White,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
