//! Query result snapshots and payload emptiness.
//!
//! Responsibilities:
//! - Define `QueryResult<T>`, the snapshot a data-fetching layer hands to the resolver.
//! - Define `QueryError`, the payload shown by the error placeholder.
//! - Define `QueryData`, which decides whether a successful payload counts as empty.
//!
//! Does NOT handle:
//! - Fetching, caching, or retrying (owned by whatever produces the snapshot).
//! - Choosing what to display (see `resolve`).
//!
//! Invariants:
//! - The three status flags are not mutually exclusive; priority is applied at read time.
//! - Only zero-length linear sequences are empty. Maps, sets, strings, and scalars never are.
//! - The serialized form uses the camelCase names of the fetching layer (`isLoading`, ...).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload carried by a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    /// Create an error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture the display text of any error.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Snapshot of an asynchronous fetch.
///
/// Produced and updated by an external fetching layer. The resolver only ever
/// borrows it, so a snapshot is treated as immutable for the duration of a call.
///
/// `QueryResult::default()` has every flag cleared and no payload; it is the
/// value an absent query behaves as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default)]
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<QueryError>,
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> QueryResult<T> {
    /// A query that has not started: no flags, no payload.
    pub const fn idle() -> Self {
        Self {
            is_loading: false,
            is_error: false,
            is_success: false,
            data: None,
            error: None,
        }
    }

    /// A query whose fetch is in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::idle()
        }
    }

    /// A query that failed with `error`.
    pub fn failed(error: QueryError) -> Self {
        Self {
            is_error: true,
            error: Some(error),
            ..Self::idle()
        }
    }

    /// A successful query carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            ..Self::idle()
        }
    }

    /// A successful query that returned no payload at all.
    pub fn success_empty() -> Self {
        Self {
            is_success: true,
            ..Self::idle()
        }
    }

    /// Attach a payload without touching the status flags.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach an error without touching the status flags.
    pub fn with_error(mut self, error: QueryError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }

    /// True when more than one status flag is set.
    pub fn has_overlapping_flags(&self) -> bool {
        [self.is_loading, self.is_error, self.is_success]
            .into_iter()
            .filter(|flag| *flag)
            .count()
            > 1
    }
}

/// Payload types the resolver can inspect for emptiness.
///
/// Only linear sequences override [`QueryData::is_empty_sequence`]. Everything
/// else keeps the default, so a present value is always content even when it
/// is zero, an empty string, or an empty map.
///
/// Domain types opt in with an empty impl:
///
/// ```
/// use query_handler_core::QueryData;
///
/// struct Report {
///     rows: usize,
/// }
///
/// impl QueryData for Report {}
/// ```
pub trait QueryData {
    /// Whether this payload is a zero-length linear sequence.
    fn is_empty_sequence(&self) -> bool {
        false
    }
}

impl<T> QueryData for Vec<T> {
    fn is_empty_sequence(&self) -> bool {
        self.is_empty()
    }
}

impl<T> QueryData for VecDeque<T> {
    fn is_empty_sequence(&self) -> bool {
        self.is_empty()
    }
}

impl<T> QueryData for [T] {
    fn is_empty_sequence(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> QueryData for [T; N] {
    fn is_empty_sequence(&self) -> bool {
        N == 0
    }
}

impl QueryData for serde_json::Value {
    fn is_empty_sequence(&self) -> bool {
        matches!(self, serde_json::Value::Array(items) if items.is_empty())
    }
}

impl<T: QueryData + ?Sized> QueryData for &T {
    fn is_empty_sequence(&self) -> bool {
        (**self).is_empty_sequence()
    }
}

impl<T: QueryData + ?Sized> QueryData for Box<T> {
    fn is_empty_sequence(&self) -> bool {
        (**self).is_empty_sequence()
    }
}

impl<T: QueryData + ?Sized> QueryData for Rc<T> {
    fn is_empty_sequence(&self) -> bool {
        (**self).is_empty_sequence()
    }
}

impl<T: QueryData + ?Sized> QueryData for Arc<T> {
    fn is_empty_sequence(&self) -> bool {
        (**self).is_empty_sequence()
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(impl QueryData for $ty {})*
    };
}

never_empty!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T> QueryData for Option<T> {}
impl<K, V, S> QueryData for HashMap<K, V, S> {}
impl<T, S> QueryData for HashSet<T, S> {}
impl<K, V> QueryData for BTreeMap<K, V> {}
impl<T> QueryData for BTreeSet<T> {}
