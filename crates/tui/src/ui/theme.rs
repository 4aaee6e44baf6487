//! TUI-specific theme helpers and style builders.
//!
//! This module extends `query_handler_config::Theme` with helpers for
//! building ratatui `Style` objects for placeholders.

use query_handler_config::Theme;
use ratatui::style::{Modifier, Style};

/// Spinner characters for animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// ```
/// use query_handler_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Base text style.
    fn text(&self) -> Style;
    /// Dimmed text style.
    fn text_dim(&self) -> Style;
    /// Title style (title color + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    /// Accent style used for the spinner.
    fn accent(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
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
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}
