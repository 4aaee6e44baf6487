//! On-disk configuration file format.
//!
//! Responsibilities:
//! - Define the serialized `ConfigFile` shape.
//! - Define config file errors (`ConfigFileError`).
//! - Read and atomically write config files.
//!
//! Invariants:
//! - Every field is optional; an empty JSON object is a valid config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{ColorTheme, FallbackVisuals};

/// Configuration file contents.
///
/// ```json
/// {
///   "theme": "dark",
///   "spinner": true,
///   "visuals": { "loading": "Fetching...", "empty": "Nothing yet", "title": "Items" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ColorTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinner: Option<bool>,
    #[serde(skip_serializing_if = "FallbackVisuals::is_empty")]
    pub visuals: FallbackVisuals,
}

/// Errors that can occur when reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes the config file via a temporary file and rename.
pub fn write_config_file(path: &Path, file: &ConfigFile) -> Result<(), ConfigFileError> {
    let write_error = |source| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(file).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(write_error)?;
    std::fs::rename(&temp_path, path).map_err(write_error)?;

    tracing::debug!(path = %path.display(), "config file saved");
    Ok(())
}
