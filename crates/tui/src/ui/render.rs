//! Demo screen rendering.
//!
//! Layout: a header with the active theme, two panes showing the same query
//! through the hook surface ("Items") and the component surface ("Summary"),
//! and a footer with key hints.
//!
//! Invariants:
//! - The provider context is rebuilt each frame so the spinner animates and
//!   theme changes apply immediately.

use query_handler_core::{ERROR_PREFIX, VisualContext, VisualOverrides};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::app::App;
use crate::handler::QueryHandler;
use crate::hook::render_query;
use crate::provider::QueryHandlerProvider;
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::error_visual;

const ITEMS_TITLE: &str = "Items";
const SUMMARY_TITLE: &str = "Summary";

/// Draw the whole demo screen.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_body(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let header = Line::from(vec![
        Span::styled("Query Handler Demo", theme.title()),
        Span::styled(format!("  theme: {}", app.color_theme()), theme.text_dim()),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let root = VisualContext::new();
    let ctx = QueryHandlerProvider::from_config_at_frame(&root, &app.config, app.spinner_frame);
    let theme = app.theme();

    // Hook surface: content is built from the returned items. The error
    // placeholder is overridden to include the message and a retry hint.
    let mut overrides = VisualOverrides::new();
    if let Some(error) = app.query.error() {
        overrides.error = Some(error_visual(
            Some(ITEMS_TITLE),
            &format!("{}{}. Press 'r' to retry.", ERROR_PREFIX, error.message()),
            &theme,
        ));
    }
    render_query(
        &ctx,
        Some(&app.query),
        Some(&overrides),
        panes[0],
        f.buffer_mut(),
        |items, area, buf| {
            let items: Vec<ListItem> = items
                .into_iter()
                .flatten()
                .map(|item| ListItem::new(item.as_str()).style(theme.text()))
                .collect();
            List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border())
                        .title(ITEMS_TITLE)
                        .title_style(theme.title()),
                )
                .render(area, buf);
        },
    );

    // Component surface: fixed children, registry/built-in placeholders.
    let count = app.query.data().map(Vec::len).unwrap_or(0);
    let summary = Paragraph::new(format!("Loaded {} items", count))
        .style(theme.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(SUMMARY_TITLE)
                .title_style(theme.title()),
        );
    f.render_widget(
        QueryHandler::new(&ctx, Some(&app.query)).children(summary),
        panes[1],
    );
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let footer = Paragraph::new(Span::styled(
        "r refetch  t cycle theme  q quit",
        theme.info(),
    ));
    f.render_widget(footer, area);
}
