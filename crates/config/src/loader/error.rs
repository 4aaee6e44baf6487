//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide conversion from `ConfigFileError`.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths).
//! - Neither config file contents nor raw `.env` lines appear in error messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unknown color theme '{0}'. Expected one of: default, light, dark, high-contrast, monochrome")]
    UnknownTheme(String),

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}: {kind}")]
    ConfigFileRead { path: PathBuf, kind: ErrorKind },

    /// Only the position of the failure is kept, never the offending text.
    #[error("Failed to parse config file at {path} (line {line}, column {column})")]
    ConfigFileParse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to write config file at {path}: {kind}")]
    ConfigFileWrite { path: PathBuf, kind: ErrorKind },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, source } => ConfigError::ConfigFileRead {
                path,
                kind: source.kind(),
            },
            ConfigFileError::Parse { path, source } => ConfigError::ConfigFileParse {
                path,
                line: source.line(),
                column: source.column(),
            },
            ConfigFileError::Write { path, source } => ConfigError::ConfigFileWrite {
                path,
                kind: source.kind(),
            },
        }
    }
}
