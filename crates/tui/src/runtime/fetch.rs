//! Simulated data fetcher.
//!
//! Stands in for a real data-fetching layer: after a delay it reports one of
//! three outcomes (items, no items, failure) back over the action channel.
//!
//! Invariants:
//! - Each fetch carries the generation it was started with, so the app can
//!   drop results that a later refetch superseded.

use std::time::Duration;

use query_handler_core::QueryError;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use crate::action::Action;

/// Number of items a successful fetch returns.
pub const SUCCESS_ITEM_COUNT: usize = 5;

/// Error message of a failed fetch.
pub const FAILURE_MESSAGE: &str = "connection refused";

/// What the simulated fetch resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Outcome {
    #[default]
    Success,
    Empty,
    Error,
}

/// The result a fetch with `outcome` produces.
pub fn simulate(outcome: Outcome) -> Result<Vec<String>, QueryError> {
    match outcome {
        Outcome::Success => Ok((1..=SUCCESS_ITEM_COUNT)
            .map(|i| format!("Item {}", i))
            .collect()),
        Outcome::Empty => Ok(Vec::new()),
        Outcome::Error => Err(QueryError::new(FAILURE_MESSAGE)),
    }
}

/// Spawn a fetch that reports back after `delay`.
pub fn spawn_fetch(
    tx: Sender<Action>,
    generation: u64,
    outcome: Outcome,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let result = simulate(outcome);
        tracing::debug!(generation, ?outcome, ok = result.is_ok(), "simulated fetch finished");

        if tx
            .send(Action::FetchCompleted { generation, result })
            .await
            .is_err()
        {
            tracing::debug!(generation, "action channel closed before fetch completed");
        }
    })
}
