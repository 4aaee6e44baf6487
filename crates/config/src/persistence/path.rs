//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the platform configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::loader::ConfigError;

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/query-handler/config.json`
/// - Windows: `%AppData%\query-handler\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
