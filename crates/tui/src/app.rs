//! Demo application state.
//!
//! Responsibilities:
//! - Hold the current query snapshot, theme, and spinner frame.
//! - Map key presses to actions and apply actions to state.
//!
//! Does NOT handle:
//! - Spawning fetches or saving the theme (done by `main` after `update`).
//! - Rendering (see `ui::render`).
//!
//! Invariants:
//! - Only the result of the latest fetch generation is applied.
//! - A refetch replaces the snapshot with a fresh loading one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use query_handler_config::{ColorTheme, Config, Theme};
use query_handler_core::QueryResult;

use crate::action::Action;
use crate::runtime::fetch::Outcome;

/// State of the demo application.
#[derive(Debug, Clone)]
pub struct App {
    pub query: QueryResult<Vec<String>>,
    pub config: Config,
    pub outcome: Outcome,
    pub spinner_frame: u8,
    generation: u64,
}

impl App {
    pub fn new(config: Config, outcome: Outcome) -> Self {
        Self {
            query: QueryResult::idle(),
            config,
            outcome,
            spinner_frame: 0,
            generation: 0,
        }
    }

    /// Generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.config.theme
    }

    pub fn theme(&self) -> Theme {
        self.config.runtime_theme()
    }

    /// Map a key press to an action.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refetch),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        }
    }

    /// Apply an action to state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::Refetch => {
                self.generation += 1;
                self.query = QueryResult::loading();
                tracing::debug!(generation = self.generation, "fetch started");
            }
            Action::CycleTheme => {
                self.config.theme = self.config.theme.cycle_next();
                tracing::debug!(theme = %self.config.theme, "theme changed");
            }
            Action::FetchCompleted { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale fetch result"
                    );
                    return;
                }
                self.query = match result {
                    Ok(items) => QueryResult::success(items),
                    Err(error) => {
                        tracing::warn!(error = %error, "fetch failed");
                        QueryResult::failed(error)
                    }
                };
            }
            Action::Input(key) => {
                if let Some(action) = self.handle_input(key) {
                    self.update(action);
                }
            }
            Action::Quit => {}
        }
    }
}
