//! Resolved configuration for query handler placeholders.
//!
//! Responsibilities:
//! - Define the final `Config` produced by `ConfigLoader::build()`.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader` module).
//!
//! Invariants:
//! - Every field has a concrete value; precedence has already been applied.

use super::theme::{ColorTheme, Theme};
use super::visuals::FallbackVisuals;

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Persisted theme selection.
    pub theme: ColorTheme,
    /// Registry texts; unset slots fall back to built-ins.
    pub visuals: FallbackVisuals,
    /// Whether the loading placeholder shows a spinner.
    pub spinner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::Default,
            visuals: FallbackVisuals::default(),
            spinner: true,
        }
    }
}

impl Config {
    /// Expand the selected theme into its runtime palette.
    pub fn runtime_theme(&self) -> Theme {
        Theme::from_color_theme(self.theme)
    }
}
