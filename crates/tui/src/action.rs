//! Action protocol for the demo event loop.
//!
//! Actions represent both user input and results of the simulated fetcher.
//! They flow through a channel into `App::update`.

use crossterm::event::KeyEvent;
use query_handler_core::QueryError;

/// Unified action type for the demo event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the demo
    Quit,
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Animation tick
    Tick,
    /// Start a new fetch, discarding any in flight
    Refetch,
    /// Switch to the next color theme and save it
    CycleTheme,
    /// Result of a simulated fetch
    FetchCompleted {
        generation: u64,
        result: Result<Vec<String>, QueryError>,
    },
}
