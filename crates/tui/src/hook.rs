//! Hook surface for terminals.
//!
//! Where the component surface renders fixed children, the hook surface hands
//! the query's data to the caller so content can be built from it (a list of
//! the returned items, a table, a summary line).
//!
//! Invariants:
//! - `content` is called only when resolution yields content, with the
//!   query's own payload reference.

use query_handler_core::{
    HookOutput, QueryData, QueryResult, VisualContext, VisualOverrides, use_query_handler,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::visual::Visual;

/// Render the placeholder for `query`, or call `content` with its data.
///
/// Returns `true` when `content` ran.
///
/// ```rust
/// use query_handler_core::{QueryResult, VisualContext};
/// use query_handler_tui::{Visual, render_query};
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::{List, Widget}};
///
/// let ctx: VisualContext<Visual> = VisualContext::new();
/// let query = QueryResult::success(vec!["Item 1".to_string()]);
/// let area = Rect::new(0, 0, 20, 3);
/// let mut buf = Buffer::empty(area);
///
/// let shown = render_query(&ctx, Some(&query), None, area, &mut buf, |items, area, buf| {
///     let items = items.cloned().unwrap_or_default();
///     List::new(items).render(area, buf);
/// });
/// assert!(shown);
/// ```
pub fn render_query<'a, T, F>(
    ctx: &'a VisualContext<Visual>,
    query: Option<&'a QueryResult<T>>,
    overrides: Option<&'a VisualOverrides<Visual>>,
    area: Rect,
    buf: &mut Buffer,
    content: F,
) -> bool
where
    T: QueryData,
    F: FnOnce(Option<&'a T>, Rect, &mut Buffer),
{
    match use_query_handler(ctx, query, overrides) {
        HookOutput::Placeholder(placeholder) => {
            placeholder.visual().render(area, buf);
            false
        }
        HookOutput::Content(data) => {
            content(data, area, buf);
            true
        }
    }
}
