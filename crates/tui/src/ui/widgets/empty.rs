//! Empty placeholder widget.
//!
//! Shown when a query succeeded but returned no items.

use query_handler_config::Theme;
use ratatui::{layout::Alignment, text::Span, widgets::Paragraph};

use super::placeholder_block;
use crate::ui::theme::ThemeExt;
use crate::visual::Visual;

/// Build an empty placeholder.
///
/// # Example
///
/// ```rust
/// use query_handler_config::Theme;
/// use query_handler_tui::ui::widgets::empty_visual;
///
/// let theme = Theme::default();
/// let visual = empty_visual(Some("Items"), "No items loaded. Press 'r' to refresh.", &theme);
/// assert!(visual.as_text().starts_with("No items"));
/// ```
pub fn empty_visual(title: Option<&str>, message: &str, theme: &Theme) -> Visual {
    let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.text_dim()))
        .block(placeholder_block(title, theme))
        .alignment(Alignment::Center);
    Visual::from_paragraph(message, paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_empty_visual() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let visual = empty_visual(
            Some("Overview"),
            "No overview data loaded. Press 'r' to refresh.",
            &Theme::default(),
        );

        terminal
            .draw(|f| {
                f.render_widget(&visual, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content = buffer
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(content.contains("Overview"));
        assert!(content.contains("No overview data loaded"));
        assert!(content.contains("Press 'r' to refresh"));
    }
}
