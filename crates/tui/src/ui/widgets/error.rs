//! Error placeholder widget.

use query_handler_config::Theme;
use ratatui::{
    layout::Alignment,
    text::Span,
    widgets::{Paragraph, Wrap},
};

use super::placeholder_block;
use crate::ui::theme::ThemeExt;
use crate::visual::Visual;

/// Build an error placeholder in the theme's error color.
///
/// Long messages wrap inside the border.
pub fn error_visual(title: Option<&str>, message: &str, theme: &Theme) -> Visual {
    let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.error()))
        .block(placeholder_block(title, theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    Visual::from_paragraph(message, paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_handler_config::ColorTheme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    #[test]
    fn test_render_error_visual_in_error_color() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let visual = error_visual(Some("Items"), "Error: connection refused", &theme);

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
        assert!(content.contains("Items"));
        assert!(content.contains("Error: connection refused"));

        let red_cells = buffer
            .content
            .iter()
            .filter(|c| c.fg == Color::Red && c.symbol() != " ")
            .count();
        assert_eq!(red_cells, "Error:connectionrefused".len());
    }
}
