//! `QueryHandler` widget: the component surface for terminals.
//!
//! Responsibilities:
//! - Render the loading, error, or empty placeholder for a query, or the
//!   caller's children once there is content.
//! - Accept per-call overrides for each placeholder.
//!
//! Does NOT handle:
//! - State precedence or visual precedence (delegated to `query_handler_core::query_handler`).
//!
//! Invariants:
//! - Children are rendered untouched; an absent query renders children.
//! - Without children, the content state renders nothing.

use query_handler_core::{
    QueryData, QueryResult, View, VisualContext, VisualOverrides, query_handler,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::visual::Visual;

/// Stand-in for a handler built without children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoChildren;

impl Widget for NoChildren {
    fn render(self, _area: Rect, _buf: &mut Buffer) {}
}

/// Widget that shows a placeholder or its children depending on a query.
///
/// ```rust
/// use query_handler_core::{QueryResult, VisualContext};
/// use query_handler_tui::{QueryHandler, Visual};
/// use ratatui::widgets::Paragraph;
///
/// let ctx: VisualContext<Visual> = VisualContext::new();
/// let query = QueryResult::success(vec!["Item 1".to_string()]);
/// let widget = QueryHandler::new(&ctx, Some(&query))
///     .empty_component(Visual::text("Nothing yet"))
///     .children(Paragraph::new("Data Loaded"));
/// # let _ = widget;
/// ```
#[derive(Debug)]
pub struct QueryHandler<'a, T, C = NoChildren> {
    ctx: &'a VisualContext<Visual>,
    query: Option<&'a QueryResult<T>>,
    overrides: VisualOverrides<Visual>,
    children: C,
}

impl<'a, T: QueryData> QueryHandler<'a, T> {
    pub fn new(ctx: &'a VisualContext<Visual>, query: Option<&'a QueryResult<T>>) -> Self {
        Self {
            ctx,
            query,
            overrides: VisualOverrides::new(),
            children: NoChildren,
        }
    }
}

impl<'a, T: QueryData, C> QueryHandler<'a, T, C> {
    /// Override the loading placeholder for this widget only.
    pub fn loading_component(mut self, visual: Visual) -> Self {
        self.overrides.loading = Some(visual);
        self
    }

    /// Override the error placeholder for this widget only.
    pub fn error_component(mut self, visual: Visual) -> Self {
        self.overrides.error = Some(visual);
        self
    }

    /// Override the empty placeholder for this widget only.
    pub fn empty_component(mut self, visual: Visual) -> Self {
        self.overrides.empty = Some(visual);
        self
    }

    /// Set every override at once, replacing any set individually.
    pub fn overrides(mut self, overrides: VisualOverrides<Visual>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Content to render when the query has data.
    pub fn children<W: Widget>(self, children: W) -> QueryHandler<'a, T, W> {
        QueryHandler {
            ctx: self.ctx,
            query: self.query,
            overrides: self.overrides,
            children,
        }
    }
}

impl<T: QueryData, C: Widget> Widget for QueryHandler<'_, T, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let QueryHandler {
            ctx,
            query,
            overrides,
            children,
        } = self;

        match query_handler(ctx, query, Some(&overrides), children) {
            View::Placeholder(placeholder) => placeholder.visual().render(area, buf),
            View::Children(children) => children.render(area, buf),
        }
    }
}
