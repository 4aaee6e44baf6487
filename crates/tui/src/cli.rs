//! Command-line argument parsing for query-handler-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `query_handler_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use query_handler_config::ColorTheme;
use query_handler_config::constants::DEFAULT_FETCH_DELAY_MS;
use std::path::PathBuf;

use crate::runtime::fetch::Outcome;

/// Command-line arguments for query-handler-demo.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme)
/// 2. Environment variables (e.g., QUERY_HANDLER_THEME)
/// 3. Config file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "query-handler-demo",
    about = "Renders query loading, error, empty, and content states in the terminal",
    version,
    after_help = "Examples:\n  query-handler-demo\n  query-handler-demo --outcome empty\n  query-handler-demo --outcome error --theme high-contrast\n  query-handler-demo --config-path ./config.json --delay-ms 3000\n\nKeys: r refetch, t cycle theme, q quit\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// What the simulated fetch resolves to
    #[arg(long, value_enum, default_value_t = Outcome::Success)]
    pub outcome: Outcome,

    /// Simulated fetch latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_FETCH_DELAY_MS)]
    pub delay_ms: u64,
}
