//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the session.
//! - Drop implementation must not panic.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores raw mode and the main screen on drop.
#[derive(Debug, Default)]
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: the explicit cleanup in main() runs first on
        // normal exit and this path must not panic.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}
