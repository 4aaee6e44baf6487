//! Query state resolution for presentation layers.
//!
//! This crate decides what a view should show for a query snapshot produced by
//! some external data-fetching layer: a loading, error, or empty placeholder,
//! or the content itself. It is generic over the visual type so any rendering
//! backend can plug in (see `query-handler-tui` for the terminal one).
//!
//! # Example
//!
//! ```rust
//! use query_handler_core::{
//!     DefaultVisuals, HookOutput, QueryError, QueryResult, VisualContext, use_query_handler,
//! };
//!
//! let root: VisualContext<String> = VisualContext::new();
//! let ctx = root.provide(DefaultVisuals::new().with_empty("Nothing here yet".to_string()));
//!
//! let failed: QueryResult<Vec<String>> = QueryResult::failed(QueryError::new("Test Error"));
//! match use_query_handler(&ctx, Some(&failed), None) {
//!     HookOutput::Placeholder(placeholder) => {
//!         assert_eq!(placeholder.visual(), "Error: Test Error");
//!     }
//!     HookOutput::Content(_) => unreachable!(),
//! }
//! ```

pub mod context;
pub mod query;
pub mod resolve;
pub mod visuals;

pub use context::{ContextError, VisualContext};
pub use query::{QueryData, QueryError, QueryResult};
pub use resolve::{
    HookOutput, QueryState, View, query_handler, resolve_placeholder, resolve_state,
    select_visual, use_query_handler,
};
pub use visuals::{
    BuiltInVisual, DefaultVisuals, EMPTY_TEXT, ERROR_PREFIX, LOADING_TEXT, Placeholder,
    PlaceholderKind, VisualOverrides, VisualSlots, VisualSource, builtin_error_text,
};
