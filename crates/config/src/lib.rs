//! Configuration for query handler placeholders.
//!
//! This crate provides the fallback texts, color theme, and spinner setting
//! that a terminal provider turns into a registry of default visuals, loaded
//! from a JSON config file, `.env`, and environment variables.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{
    ConfigFile, ConfigFileError, default_config_path, read_config_file, write_config_file,
};
pub use types::{ColorTheme, Config, FallbackVisuals, Theme};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
