//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Config file loading logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Intended call order is `load_dotenv`, `from_file`, `from_env`, then `with_*` setters.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::{apply_file, resolve_config_path};
use crate::constants::ENV_DOTENV_DISABLED;
use crate::types::{ColorTheme, Config, FallbackVisuals};

/// Configuration loader that builds config from files, environment variables, and setters.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    spinner: Option<bool>,
    visuals: FallbackVisuals,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the registry loading text.
    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.visuals.loading = Some(text.into());
        self
    }

    /// Set the registry error text.
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.visuals.error = Some(text.into());
        self
    }

    /// Set the registry empty text.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.visuals.empty = Some(text.into());
        self
    }

    /// Set the placeholder border title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.visuals.title = Some(title.into());
        self
    }

    /// Enable or disable the loading spinner.
    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// The config file path `from_file` reads and the demo writes.
    ///
    /// Builder path, then `QUERY_HANDLER_CONFIG_PATH`, then the platform default.
    pub fn resolved_config_path(&self) -> Result<PathBuf, ConfigError> {
        resolve_config_path(self).map(|(path, _)| path)
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn theme(&self) -> Option<ColorTheme> {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn spinner(&self) -> Option<bool> {
        self.spinner
    }

    pub(crate) fn set_spinner(&mut self, spinner: Option<bool>) {
        self.spinner = spinner;
    }

    pub(crate) fn visuals_mut(&mut self) -> &mut FallbackVisuals {
        &mut self.visuals
    }

    /// Validate and build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.visuals.validate()?;

        let defaults = Config::default();
        let config = Config {
            theme: self.theme.unwrap_or(defaults.theme),
            spinner: self.spinner.unwrap_or(defaults.spinner),
            visuals: self.visuals,
        };

        tracing::debug!(
            theme = %config.theme,
            spinner = config.spinner,
            registry_slots = ?config.visuals,
            "configuration built"
        );
        Ok(config)
    }
}
