//! Themed placeholder widgets.
//!
//! Each builder returns a `Visual` (bordered, titled, centered) that can be
//! registered with a provider or passed as a per-call override.

pub mod empty;
pub mod error;
pub mod loading;

pub use empty::empty_visual;
pub use error::error_visual;
pub use loading::loading_visual;

use query_handler_config::Theme;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::ThemeExt;

/// Bordered block shared by all placeholder widgets.
pub(crate) fn placeholder_block(title: Option<&str>, theme: &Theme) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    match title {
        Some(title) => block.title(title.to_string()).title_style(theme.title()),
        None => block,
    }
}
