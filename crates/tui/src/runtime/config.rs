//! Configuration loading and theme persistence for the demo.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//! - Save the selected color theme back to the config file.
//!
//! Does NOT handle:
//! - Parsing individual sources (see `query_handler_config`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` is called before any other source is read.
//! - Saving the theme keeps every other value already in the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use query_handler_config::{
    ColorTheme, Config, ConfigFile, ConfigLoader, read_config_file, write_config_file,
};

use crate::cli::Cli;

/// Configuration plus the file it is saved to.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

/// Load configuration from `.env`, the config file, env vars, and CLI flags.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(config_path) = &cli.config_path {
        loader = loader.with_config_path(config_path.clone());
    }

    let path = loader.resolved_config_path()?;
    let mut loader = loader
        .from_file()
        .with_context(|| format!("loading {}", path.display()))?
        .from_env()?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }

    let config = loader.build()?;
    tracing::info!(
        path = %path.display(),
        theme = %config.theme,
        spinner = config.spinner,
        "configuration loaded"
    );

    Ok(LoadedConfig { config, path })
}

/// Persist `theme` into the config file at `path`.
pub fn save_theme(path: &Path, theme: ColorTheme) -> Result<()> {
    let mut file = if path.exists() {
        read_config_file(path)?
    } else {
        ConfigFile::default()
    };

    file.theme = Some(theme);
    write_config_file(path, &file)?;
    tracing::info!(path = %path.display(), %theme, "theme saved");
    Ok(())
}
