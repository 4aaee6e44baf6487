//! State resolution for the component and hook surfaces.
//!
//! Responsibilities:
//! - Classify a query snapshot as loading, error, empty, or content.
//! - Pick the placeholder visual: override, then registry default, then built-in.
//! - Expose the component surface (`query_handler`) and the hook surface
//!   (`use_query_handler`) as tagged unions callers match on.
//!
//! Does NOT handle:
//! - Drawing anything (see the TUI crate).
//! - Fetching or mutating the query (the resolver only borrows snapshots).
//!
//! Invariants:
//! - Precedence is fixed: loading > error > empty > content. First match wins.
//! - Overlapping flags never fail; they resolve silently by precedence.
//! - An absent query resolves to content.
//! - Content from the hook is the snapshot's own `data`, borrowed, never copied.

use std::borrow::Cow;

use crate::context::VisualContext;
use crate::query::{QueryData, QueryError, QueryResult};
use crate::visuals::{
    BuiltInVisual, DefaultVisuals, Placeholder, PlaceholderKind, VisualOverrides, VisualSource,
};

/// The four mutually exclusive display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryState {
    Loading,
    Error,
    Empty,
    Content,
}

impl QueryState {
    /// The placeholder kind for this state, `None` for content.
    pub fn placeholder_kind(self) -> Option<PlaceholderKind> {
        match self {
            Self::Loading => Some(PlaceholderKind::Loading),
            Self::Error => Some(PlaceholderKind::Error),
            Self::Empty => Some(PlaceholderKind::Empty),
            Self::Content => None,
        }
    }
}

/// Classify a query snapshot.
///
/// ```
/// use query_handler_core::{QueryResult, QueryState, resolve_state};
///
/// let empty: QueryResult<Vec<u32>> = QueryResult::success(vec![]);
/// assert_eq!(resolve_state(Some(&empty)), QueryState::Empty);
///
/// let zero = QueryResult::success(0u32);
/// assert_eq!(resolve_state(Some(&zero)), QueryState::Content);
/// ```
pub fn resolve_state<T: QueryData>(query: Option<&QueryResult<T>>) -> QueryState {
    let Some(query) = query else {
        return QueryState::Content;
    };

    if query.has_overlapping_flags() {
        tracing::debug!(
            is_loading = query.is_loading,
            is_error = query.is_error,
            is_success = query.is_success,
            "query flags overlap, resolving by precedence"
        );
    }

    if query.is_loading {
        QueryState::Loading
    } else if query.is_error {
        QueryState::Error
    } else if query.is_success
        && query
            .data
            .as_ref()
            .is_none_or(|data| data.is_empty_sequence())
    {
        QueryState::Empty
    } else {
        QueryState::Content
    }
}

/// Pick the visual for a placeholder kind.
///
/// `error` only feeds the built-in error visual; supplied visuals are used as-is.
pub fn select_visual<'a, V: BuiltInVisual>(
    kind: PlaceholderKind,
    error: Option<&QueryError>,
    overrides: Option<&'a VisualOverrides<V>>,
    defaults: &'a DefaultVisuals<V>,
) -> Placeholder<'a, V> {
    if let Some(visual) = overrides.and_then(|slots| slots.get(kind)) {
        return Placeholder {
            kind,
            source: VisualSource::Override,
            visual: Cow::Borrowed(visual),
        };
    }

    if let Some(visual) = defaults.get(kind) {
        return Placeholder {
            kind,
            source: VisualSource::Registry,
            visual: Cow::Borrowed(visual),
        };
    }

    let visual = match kind {
        PlaceholderKind::Loading => V::loading(),
        PlaceholderKind::Error => V::error(error),
        PlaceholderKind::Empty => V::empty(),
    };
    Placeholder {
        kind,
        source: VisualSource::BuiltIn,
        visual: Cow::Owned(visual),
    }
}

/// Resolve a query to its placeholder, or `None` when content should show.
pub fn resolve_placeholder<'a, T: QueryData, V: BuiltInVisual>(
    ctx: &'a VisualContext<V>,
    query: Option<&QueryResult<T>>,
    overrides: Option<&'a VisualOverrides<V>>,
) -> Option<Placeholder<'a, V>> {
    let state = resolve_state(query);
    let kind = state.placeholder_kind()?;
    let error = query.and_then(QueryResult::error);
    let placeholder = select_visual(kind, error, overrides, ctx.defaults());

    tracing::trace!(
        kind = %placeholder.kind,
        source = ?placeholder.source,
        "resolved query placeholder"
    );
    Some(placeholder)
}

/// Output of the hook surface.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutput<'a, V: Clone, T> {
    /// Loading, error, or empty visual.
    Placeholder(Placeholder<'a, V>),
    /// The query's own payload. `None` when the query had none (e.g. absent or idle).
    Content(Option<&'a T>),
}

impl<'a, V: Clone, T> HookOutput<'a, V, T> {
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    pub fn placeholder(&self) -> Option<&Placeholder<'a, V>> {
        match self {
            Self::Placeholder(placeholder) => Some(placeholder),
            Self::Content(_) => None,
        }
    }

    /// The payload when this is content.
    pub fn content(&self) -> Option<&'a T> {
        match self {
            Self::Content(data) => *data,
            Self::Placeholder(_) => None,
        }
    }
}

/// Hook surface: a placeholder visual, or the query's data.
///
/// ```
/// use query_handler_core::{HookOutput, QueryResult, VisualContext, use_query_handler};
///
/// let ctx: VisualContext<String> = VisualContext::new();
/// let query = QueryResult::success(vec!["Item 1".to_string()]);
///
/// match use_query_handler(&ctx, Some(&query), None) {
///     HookOutput::Content(data) => assert!(std::ptr::eq(data.unwrap(), query.data().unwrap())),
///     HookOutput::Placeholder(_) => unreachable!(),
/// }
/// ```
pub fn use_query_handler<'a, T: QueryData, V: BuiltInVisual>(
    ctx: &'a VisualContext<V>,
    query: Option<&'a QueryResult<T>>,
    overrides: Option<&'a VisualOverrides<V>>,
) -> HookOutput<'a, V, T> {
    match resolve_placeholder(ctx, query, overrides) {
        Some(placeholder) => HookOutput::Placeholder(placeholder),
        None => HookOutput::Content(query.and_then(QueryResult::data)),
    }
}

/// Output of the component surface.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a, V: Clone, C> {
    Placeholder(Placeholder<'a, V>),
    /// The caller's children, passed through untouched.
    Children(C),
}

impl<'a, V: Clone, C> View<'a, V, C> {
    pub fn is_children(&self) -> bool {
        matches!(self, Self::Children(_))
    }
}

/// Component surface: a placeholder visual, or `children` for content.
///
/// An absent `query` renders `children`.
pub fn query_handler<'a, T: QueryData, V: BuiltInVisual, C>(
    ctx: &'a VisualContext<V>,
    query: Option<&QueryResult<T>>,
    overrides: Option<&'a VisualOverrides<V>>,
    children: C,
) -> View<'a, V, C> {
    match resolve_placeholder(ctx, query, overrides) {
        Some(placeholder) => View::Placeholder(placeholder),
        None => View::Children(children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> VisualContext<String> {
        VisualContext::new()
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let query = QueryResult::success(vec![1]).with_error(QueryError::new("ignored"));
        let query = QueryResult {
            is_loading: true,
            is_error: true,
            ..query
        };
        assert_eq!(resolve_state(Some(&query)), QueryState::Loading);
    }

    #[test]
    fn test_error_wins_over_success() {
        let mut query = QueryResult::success(vec![1]);
        query.is_error = true;
        assert_eq!(resolve_state(Some(&query)), QueryState::Error);
    }

    #[test]
    fn test_absent_query_is_content() {
        assert_eq!(resolve_state::<Vec<u8>>(None), QueryState::Content);
    }

    #[test]
    fn test_idle_query_is_content() {
        let query: QueryResult<Vec<u8>> = QueryResult::idle();
        assert_eq!(resolve_state(Some(&query)), QueryState::Content);
    }

    #[test]
    fn test_success_without_data_is_empty() {
        let query: QueryResult<Vec<u8>> = QueryResult::success_empty();
        assert_eq!(resolve_state(Some(&query)), QueryState::Empty);
    }

    #[test]
    fn test_present_non_sequence_values_are_content() {
        assert_eq!(
            resolve_state(Some(&QueryResult::success(String::new()))),
            QueryState::Content
        );
        assert_eq!(
            resolve_state(Some(&QueryResult::success(false))),
            QueryState::Content
        );
        assert_eq!(
            resolve_state(Some(&QueryResult::success(std::collections::HashSet::<u8>::new()))),
            QueryState::Content
        );
    }

    #[test]
    fn test_select_visual_precedence() {
        let overrides = VisualOverrides::new().with_loading("override".to_string());
        let defaults = DefaultVisuals::new()
            .with_loading("registry".to_string())
            .with_empty("registry empty".to_string());

        let loading = select_visual(PlaceholderKind::Loading, None, Some(&overrides), &defaults);
        assert_eq!(loading.source, VisualSource::Override);
        assert_eq!(loading.visual(), "override");

        let empty = select_visual(PlaceholderKind::Empty, None, Some(&overrides), &defaults);
        assert_eq!(empty.source, VisualSource::Registry);
        assert_eq!(empty.visual(), "registry empty");

        let error = QueryError::new("Test Error");
        let failed =
            select_visual(PlaceholderKind::Error, Some(&error), Some(&overrides), &defaults);
        assert_eq!(failed.source, VisualSource::BuiltIn);
        assert_eq!(failed.visual(), "Error: Test Error");
    }

    #[test]
    fn test_supplied_visuals_are_borrowed() {
        let overrides = VisualOverrides::new().with_empty("mine".to_string());
        let defaults = DefaultVisuals::new();
        let placeholder = select_visual(
            PlaceholderKind::Empty,
            None,
            Some(&overrides),
            &defaults,
        );
        assert!(matches!(placeholder.visual, Cow::Borrowed(_)));
    }

    #[test]
    fn test_hook_returns_placeholder_for_loading() {
        let ctx = ctx();
        let query: QueryResult<Vec<String>> = QueryResult::loading();
        let output = use_query_handler(&ctx, Some(&query), None);
        assert_eq!(
            output.placeholder().map(|p| p.visual().as_str()),
            Some("Loading...")
        );
        assert!(output.content().is_none());
    }

    #[test]
    fn test_hook_returns_same_data_reference() {
        let ctx = ctx();
        let query = QueryResult::success("Data Loaded".to_string());
        let output = use_query_handler(&ctx, Some(&query), None);
        let data = output.content().unwrap();
        assert!(std::ptr::eq(data, query.data().unwrap()));
    }

    #[test]
    fn test_hook_content_without_data() {
        let ctx = ctx();
        let output = use_query_handler::<Vec<u8>, String>(&ctx, None, None);
        assert_eq!(output, HookOutput::Content(None));
    }

    #[test]
    fn test_component_passes_children_through() {
        let ctx = ctx();
        let query = QueryResult::success(vec!["Item 1"]);
        let view = query_handler(&ctx, Some(&query), None, "Data Loaded");
        assert_eq!(view, View::Children("Data Loaded"));
    }

    #[test]
    fn test_component_renders_empty_placeholder() {
        let ctx = ctx();
        let query: QueryResult<Vec<&str>> = QueryResult::success(vec![]);
        match query_handler(&ctx, Some(&query), None, "Data Loaded") {
            View::Placeholder(placeholder) => {
                assert_eq!(placeholder.kind, PlaceholderKind::Empty);
                assert_eq!(placeholder.into_visual(), "No Data Found");
            }
            View::Children(_) => panic!("expected empty placeholder"),
        }
    }
}
