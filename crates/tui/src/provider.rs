//! Providers that register terminal placeholder defaults.
//!
//! Responsibilities:
//! - Build a nested `VisualContext<Visual>` from loaded configuration,
//!   registering only the slots the configuration sets.
//! - Offer a themed preset registering all three styled placeholders.
//!
//! Does NOT handle:
//! - Loading configuration (see `query_handler_config::ConfigLoader`).
//!
//! Invariants:
//! - The returned context replaces the parent's registry; nothing is merged.
//! - Registered visuals are static: the error placeholder never includes the
//!   query's error message.

use query_handler_config::{Config, Theme};
use query_handler_core::{DefaultVisuals, EMPTY_TEXT, LOADING_TEXT, VisualContext};

use crate::ui::widgets::{empty_visual, error_visual, loading_visual};
use crate::visual::Visual;

/// Error text used by the themed preset.
pub const THEMED_ERROR_TEXT: &str = "Something went wrong";

/// Constructors for provider contexts.
pub struct QueryHandlerProvider;

impl QueryHandlerProvider {
    /// Registry built from configuration, with the spinner at its first frame.
    pub fn from_config(parent: &VisualContext<Visual>, config: &Config) -> VisualContext<Visual> {
        Self::from_config_at_frame(parent, config, 0)
    }

    /// Registry built from configuration for a given spinner frame.
    pub fn from_config_at_frame(
        parent: &VisualContext<Visual>,
        config: &Config,
        spinner_frame: u8,
    ) -> VisualContext<Visual> {
        parent.provide(Self::registry_from_config(config, spinner_frame))
    }

    /// The registry `from_config` installs.
    pub fn registry_from_config(config: &Config, spinner_frame: u8) -> DefaultVisuals<Visual> {
        let theme = config.runtime_theme();
        let title = config.visuals.title.as_deref();
        let spinner = config.spinner.then_some(spinner_frame);

        let mut registry = DefaultVisuals::new();
        if let Some(text) = &config.visuals.loading {
            registry.loading = Some(loading_visual(title, text, spinner, &theme));
        }
        if let Some(text) = &config.visuals.error {
            registry.error = Some(error_visual(title, text, &theme));
        }
        if let Some(text) = &config.visuals.empty {
            registry.empty = Some(empty_visual(title, text, &theme));
        }
        registry
    }

    /// Registry with all three placeholders styled for `theme`.
    pub fn themed(
        parent: &VisualContext<Visual>,
        theme: &Theme,
        spinner_frame: u8,
    ) -> VisualContext<Visual> {
        parent.provide(
            DefaultVisuals::new()
                .with_loading(loading_visual(None, LOADING_TEXT, Some(spinner_frame), theme))
                .with_error(error_visual(None, THEMED_ERROR_TEXT, theme))
                .with_empty(empty_visual(None, EMPTY_TEXT, theme)),
        )
    }
}
