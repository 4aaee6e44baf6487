//! Placeholder visual slots and built-in fallbacks.
//!
//! Responsibilities:
//! - Name the three placeholder kinds (loading, error, empty).
//! - Hold optional visuals per kind, both for per-call overrides and for
//!   provider-wide registry defaults.
//! - Define the built-in fallback texts and the `BuiltInVisual` trait that
//!   turns them into a concrete visual type.
//!
//! Does NOT handle:
//! - Deciding which kind applies to a query (see `resolve`).
//! - Scoping registry defaults to a subtree (see `context`).

use std::borrow::Cow;
use std::fmt;

use crate::query::QueryError;

/// Built-in loading text.
pub const LOADING_TEXT: &str = "Loading...";

/// Prefix of the built-in error text. The query error's message follows it.
pub const ERROR_PREFIX: &str = "Error: ";

/// Built-in empty text.
pub const EMPTY_TEXT: &str = "No Data Found";

/// Built-in error text: `"Error: "` followed by the message, if any.
pub fn builtin_error_text(error: Option<&QueryError>) -> String {
    format!(
        "{ERROR_PREFIX}{}",
        error.map(QueryError::message).unwrap_or_default()
    )
}

/// A visual type that can build the lowest-precedence fallbacks itself.
pub trait BuiltInVisual: Clone {
    fn loading() -> Self;
    fn error(error: Option<&QueryError>) -> Self;
    fn empty() -> Self;
}

impl BuiltInVisual for String {
    fn loading() -> Self {
        LOADING_TEXT.to_string()
    }

    fn error(error: Option<&QueryError>) -> Self {
        builtin_error_text(error)
    }

    fn empty() -> Self {
        EMPTY_TEXT.to_string()
    }
}

/// The three non-content states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    Loading,
    Error,
    Empty,
}

impl PlaceholderKind {
    pub const ALL: [PlaceholderKind; 3] = [Self::Loading, Self::Error, Self::Empty];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which precedence layer supplied a placeholder visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualSource {
    /// Passed by the immediate caller.
    Override,
    /// Registered by the nearest provider.
    Registry,
    /// Constructed from the built-in fallback.
    BuiltIn,
}

/// One optional visual per placeholder kind.
///
/// Used for both precedence layers that callers can fill: see
/// [`VisualOverrides`] and [`DefaultVisuals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualSlots<V> {
    pub loading: Option<V>,
    pub error: Option<V>,
    pub empty: Option<V>,
}

/// Per-invocation visuals supplied by the caller. Highest precedence.
pub type VisualOverrides<V> = VisualSlots<V>;

/// Provider-scoped fallback visuals. Second precedence.
pub type DefaultVisuals<V> = VisualSlots<V>;

impl<V> Default for VisualSlots<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VisualSlots<V> {
    pub const fn new() -> Self {
        Self {
            loading: None,
            error: None,
            empty: None,
        }
    }

    pub fn with_loading(mut self, visual: V) -> Self {
        self.loading = Some(visual);
        self
    }

    pub fn with_error(mut self, visual: V) -> Self {
        self.error = Some(visual);
        self
    }

    pub fn with_empty(mut self, visual: V) -> Self {
        self.empty = Some(visual);
        self
    }

    /// Fill the slot for `kind`, replacing anything already there.
    pub fn set(&mut self, kind: PlaceholderKind, visual: V) {
        *self.slot_mut(kind) = Some(visual);
    }

    pub fn get(&self, kind: PlaceholderKind) -> Option<&V> {
        match kind {
            PlaceholderKind::Loading => self.loading.as_ref(),
            PlaceholderKind::Error => self.error.as_ref(),
            PlaceholderKind::Empty => self.empty.as_ref(),
        }
    }

    /// True when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.loading.is_none() && self.error.is_none() && self.empty.is_none()
    }

    /// Map every filled slot to another visual type.
    pub fn map<W>(self, mut f: impl FnMut(V) -> W) -> VisualSlots<W> {
        VisualSlots {
            loading: self.loading.map(&mut f),
            error: self.error.map(&mut f),
            empty: self.empty.map(&mut f),
        }
    }

    fn slot_mut(&mut self, kind: PlaceholderKind) -> &mut Option<V> {
        match kind {
            PlaceholderKind::Loading => &mut self.loading,
            PlaceholderKind::Error => &mut self.error,
            PlaceholderKind::Empty => &mut self.empty,
        }
    }
}

/// The visual chosen for a non-content state.
///
/// Visuals from an override or the registry are borrowed; built-ins are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder<'a, V: Clone> {
    pub kind: PlaceholderKind,
    pub source: VisualSource,
    pub visual: Cow<'a, V>,
}

impl<'a, V: Clone> Placeholder<'a, V> {
    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn into_visual(self) -> V {
        self.visual.into_owned()
    }
}
