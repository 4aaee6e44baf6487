//! Provider-scoped registry of default visuals.
//!
//! Responsibilities:
//! - Carry the active `DefaultVisuals` explicitly to every resolution call.
//! - Establish nested providers, where an inner provider replaces the outer
//!   registry for its subtree.
//! - Expose the registry for inspection, with a lenient and a strict accessor.
//!
//! Does NOT handle:
//! - Picking a visual for a query (see `resolve`).
//! - Building visuals from configuration files (see the TUI provider).
//!
//! Invariants:
//! - Outside any provider the registry is empty, never absent.
//! - Providers never merge: `provide` discards the outer registry entirely.
//! - A context is immutable once built; cloning shares the registry.

use std::sync::Arc;

use thiserror::Error;

use crate::visuals::DefaultVisuals;

/// Errors raised when inspecting a visual context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("query handler configuration requested outside of a provider")]
    MissingProvider,
}

/// Explicit environment holding the nearest provider's default visuals.
///
/// Pass the context down to wherever queries are resolved. A fresh
/// [`VisualContext::new`] stands for "no provider": its registry is empty, so
/// every placeholder falls through to overrides and built-ins.
///
/// ```
/// use query_handler_core::{DefaultVisuals, VisualContext};
///
/// let root: VisualContext<String> = VisualContext::new();
/// let app = root.provide(DefaultVisuals::new().with_loading("Fetching...".to_string()));
///
/// assert!(root.defaults().loading.is_none());
/// assert_eq!(app.defaults().loading.as_deref(), Some("Fetching..."));
/// ```
#[derive(Debug)]
pub struct VisualContext<V> {
    defaults: Arc<DefaultVisuals<V>>,
    depth: usize,
}

impl<V> Clone for VisualContext<V> {
    fn clone(&self) -> Self {
        Self {
            defaults: Arc::clone(&self.defaults),
            depth: self.depth,
        }
    }
}

impl<V> Default for VisualContext<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VisualContext<V> {
    /// The ambient context outside any provider.
    pub fn new() -> Self {
        Self {
            defaults: Arc::new(DefaultVisuals::new()),
            depth: 0,
        }
    }

    /// Establish a provider nested in this context.
    ///
    /// The returned context sees only `defaults`; slots left empty there fall
    /// back to built-ins even if this context had them filled.
    pub fn provide(&self, defaults: DefaultVisuals<V>) -> Self {
        self.provide_shared(Arc::new(defaults))
    }

    /// Like [`VisualContext::provide`], sharing an already allocated registry.
    pub fn provide_shared(&self, defaults: Arc<DefaultVisuals<V>>) -> Self {
        tracing::trace!(depth = self.depth + 1, "establishing query handler provider");
        Self {
            defaults,
            depth: self.depth + 1,
        }
    }

    /// Run `f` inside a provider scoped to the closure.
    pub fn with_provider<R>(
        &self,
        defaults: DefaultVisuals<V>,
        f: impl FnOnce(&VisualContext<V>) -> R,
    ) -> R {
        let scoped = self.provide(defaults);
        f(&scoped)
    }

    /// Registry used by resolution. Empty outside a provider.
    pub fn defaults(&self) -> &DefaultVisuals<V> {
        &self.defaults
    }

    /// Inspect the active configuration.
    ///
    /// Outside a provider this yields the empty registry rather than failing,
    /// matching how resolution reads it. Use
    /// [`VisualContext::require_provider`] to treat that case as an error.
    pub fn config(&self) -> Result<&DefaultVisuals<V>, ContextError> {
        Ok(&self.defaults)
    }

    /// Inspect the active configuration, failing outside any provider.
    pub fn require_provider(&self) -> Result<&DefaultVisuals<V>, ContextError> {
        if self.is_provided() {
            Ok(&self.defaults)
        } else {
            Err(ContextError::MissingProvider)
        }
    }

    /// Whether a provider established this context.
    pub fn is_provided(&self) -> bool {
        self.depth > 0
    }

    /// Number of providers between this context and the root.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
