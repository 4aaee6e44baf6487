//! Loading placeholder widget.
//!
//! Provides a consistent loading indicator with an optional animated spinner.

use query_handler_config::Theme;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::placeholder_block;
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::visual::Visual;

/// Build a loading placeholder.
///
/// # Arguments
///
/// * `title` - Optional title for the widget border
/// * `message` - The loading message (e.g. "Loading...", "Fetching items...")
/// * `spinner_frame` - Spinner animation frame, or `None` for no spinner
/// * `theme` - The theme for styling
///
/// # Example
///
/// ```rust
/// use query_handler_config::Theme;
/// use query_handler_tui::ui::widgets::loading_visual;
///
/// let visual = loading_visual(Some("Items"), "Loading...", Some(0), &Theme::default());
/// assert_eq!(visual.as_text(), "⠋ Loading...");
/// ```
pub fn loading_visual(
    title: Option<&str>,
    message: &str,
    spinner_frame: Option<u8>,
    theme: &Theme,
) -> Visual {
    let (text, line) = match spinner_frame {
        Some(frame) => {
            let spinner = spinner_char(frame);
            let line = Line::from(vec![
                Span::styled(spinner.to_string(), theme.accent()),
                Span::raw(" "),
                Span::styled(message.to_string(), theme.text()),
            ]);
            (format!("{} {}", spinner, message), line)
        }
        None => (
            message.to_string(),
            Line::from(Span::styled(message.to_string(), theme.text())),
        ),
    };

    let paragraph = Paragraph::new(line)
        .block(placeholder_block(title, theme))
        .alignment(Alignment::Center);
    Visual::from_paragraph(text, paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_loading_visual() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let visual = loading_visual(Some("Test"), "Loading test data...", Some(0), &theme);

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
        assert!(content.contains("Test"));
        assert!(content.contains("Loading test data..."));
        assert!(content.contains('⠋'));
    }

    #[test]
    fn test_spinner_frame_changes_text() {
        let theme = Theme::default();
        let first = loading_visual(None, "Loading...", Some(0), &theme);
        let second = loading_visual(None, "Loading...", Some(1), &theme);
        assert_ne!(first.as_text(), second.as_text());
    }

    #[test]
    fn test_without_spinner() {
        let visual = loading_visual(None, "Loading...", None, &Theme::default());
        assert_eq!(visual.as_text(), "Loading...");
    }
}
