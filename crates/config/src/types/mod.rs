//! Configuration type definitions for the query handler.
//!
//! Responsibilities:
//! - Define configuration types for themes and placeholder fallback texts.
//! - Ensure consistent defaults and type safety across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Rendering placeholders (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.

mod config;
mod theme;
mod visuals;

pub use config::Config;
pub use theme::{ColorTheme, Theme};
pub use visuals::FallbackVisuals;
