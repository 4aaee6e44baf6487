//! Concrete visual type for terminal placeholders.
//!
//! Responsibilities:
//! - Wrap a ratatui `Paragraph` so placeholders can be stored in a registry,
//!   passed as overrides, and rendered any number of times.
//! - Provide the plain built-in visuals ("Loading...", "Error: <message>", "No Data Found").
//!
//! Does NOT handle:
//! - Themed or bordered placeholders (see `ui::widgets`).
//! - Choosing which placeholder applies (see `query_handler_core`).
//!
//! Invariants:
//! - `text()` is the plain text the paragraph displays, minus any border title.

use query_handler_core::{BuiltInVisual, EMPTY_TEXT, LOADING_TEXT, QueryError, builtin_error_text};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

/// A renderable placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visual {
    text: String,
    paragraph: Paragraph<'static>,
}

impl Visual {
    /// Centered plain text with no border.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let paragraph = Paragraph::new(text.clone()).alignment(Alignment::Center);
        Self { text, paragraph }
    }

    /// Wrap an already styled paragraph. `text` is what the paragraph shows.
    pub fn from_paragraph(text: impl Into<String>, paragraph: Paragraph<'static>) -> Self {
        Self {
            text: text.into(),
            paragraph,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }

    pub fn paragraph(&self) -> &Paragraph<'static> {
        &self.paragraph
    }
}

impl BuiltInVisual for Visual {
    fn loading() -> Self {
        Self::text(LOADING_TEXT)
    }

    fn error(error: Option<&QueryError>) -> Self {
        Self::text(builtin_error_text(error))
    }

    fn empty() -> Self {
        Self::text(EMPTY_TEXT)
    }
}

impl Widget for &Visual {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.paragraph).render(area, buf);
    }
}

impl Widget for Visual {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph.render(area, buf);
    }
}
