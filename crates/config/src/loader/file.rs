//! Config file loading.
//!
//! Responsibilities:
//! - Resolve which config file to read (builder path, `QUERY_HANDLER_CONFIG_PATH`, default).
//! - Apply config file values to a `ConfigLoader` instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Writing the file back (see `persistence`).
//!
//! Invariants:
//! - File values only fill fields that are still unset, so they never beat
//!   environment variables or builder setters regardless of call order.
//! - A missing file is not an error at any location; it is created on the
//!   first save. Unreadable or malformed files are errors.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::ENV_CONFIG_PATH;
use crate::persistence::{default_config_path, read_config_file};

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathOrigin {
    Explicit,
    Default,
}

/// Resolve the config file path and whether it was requested explicitly.
pub(crate) fn resolve_config_path(
    loader: &ConfigLoader,
) -> Result<(PathBuf, PathOrigin), ConfigError> {
    if let Some(path) = loader.config_path() {
        return Ok((path.clone(), PathOrigin::Explicit));
    }
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        return Ok((PathBuf::from(path), PathOrigin::Explicit));
    }
    Ok((default_config_path()?, PathOrigin::Default))
}

/// Apply config file values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, origin) = resolve_config_path(loader)?;

    if !path.exists() {
        match origin {
            PathOrigin::Explicit => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults")
            }
            PathOrigin::Default => {
                tracing::debug!(path = %path.display(), "no config file at default location")
            }
        }
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::info!(path = %path.display(), "loaded config file");

    if loader.theme().is_none() {
        loader.set_theme(file.theme);
    }
    if loader.spinner().is_none() {
        loader.set_spinner(file.spinner);
    }
    let current = std::mem::take(loader.visuals_mut());
    *loader.visuals_mut() = file.visuals.merge(current);

    Ok(())
}
