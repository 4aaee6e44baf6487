//! Runtime components for the demo binary.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading and theme persistence
//! - The simulated fetcher feeding query snapshots
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `app` and `ui`).

pub mod config;
pub mod fetch;
pub mod terminal;
