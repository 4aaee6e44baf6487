//! Centralized constants for the query handler workspace.
//!
//! Environment variable names and file locations live here so the loader,
//! the demo binary, and the tests agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Color theme name (e.g. `dark`, `high-contrast`).
pub const ENV_THEME: &str = "QUERY_HANDLER_THEME";

/// Registry default text for the loading placeholder.
pub const ENV_LOADING_TEXT: &str = "QUERY_HANDLER_LOADING_TEXT";

/// Registry default text for the error placeholder.
pub const ENV_ERROR_TEXT: &str = "QUERY_HANDLER_ERROR_TEXT";

/// Registry default text for the empty placeholder.
pub const ENV_EMPTY_TEXT: &str = "QUERY_HANDLER_EMPTY_TEXT";

/// Border title shared by the themed placeholders.
pub const ENV_TITLE: &str = "QUERY_HANDLER_TITLE";

/// Whether the loading placeholder shows an animated spinner.
pub const ENV_SPINNER: &str = "QUERY_HANDLER_SPINNER";

/// Path to the JSON configuration file.
pub const ENV_CONFIG_PATH: &str = "QUERY_HANDLER_CONFIG_PATH";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Files
// =============================================================================

/// Application name used for platform config directories.
pub const APP_NAME: &str = "query-handler";

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Maximum length of any configured placeholder text, in characters.
pub const MAX_TEXT_LEN: usize = 256;

// =============================================================================
// Demo Runtime
// =============================================================================

/// UI tick interval driving the spinner animation.
pub const DEFAULT_UI_TICK_MS: u64 = 100;

/// Capacity of the demo action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Simulated fetch latency used by the demo when none is given.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 1500;
