//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `QUERY_HANDLER_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//!
//! Does NOT handle:
//! - Loading the config file (see file.rs).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Environment variables take precedence over config file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_EMPTY_TEXT, ENV_ERROR_TEXT, ENV_LOADING_TEXT, ENV_SPINNER, ENV_THEME, ENV_TITLE,
};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag, accepting `true`/`false`/`1`/`0`/`yes`/`no`.
fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        loader.set_theme(Some(theme.parse::<ColorTheme>()?));
    }
    if let Some(text) = env_var_or_none(ENV_LOADING_TEXT) {
        loader.visuals_mut().loading = Some(text);
    }
    if let Some(text) = env_var_or_none(ENV_ERROR_TEXT) {
        loader.visuals_mut().error = Some(text);
    }
    if let Some(text) = env_var_or_none(ENV_EMPTY_TEXT) {
        loader.visuals_mut().empty = Some(text);
    }
    if let Some(title) = env_var_or_none(ENV_TITLE) {
        loader.visuals_mut().title = Some(title);
    }
    if let Some(spinner) = env_var_or_none(ENV_SPINNER) {
        loader.set_spinner(Some(parse_flag(ENV_SPINNER, &spinner)?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_forms() {
        assert!(parse_flag("X", "true").unwrap());
        assert!(parse_flag("X", "YES").unwrap());
        assert!(parse_flag("X", "1").unwrap());
        assert!(!parse_flag("X", "False").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        let err = parse_flag("QUERY_HANDLER_SPINNER", "sometimes").unwrap_err();
        assert!(err.to_string().contains("QUERY_HANDLER_SPINNER"));
    }
}
