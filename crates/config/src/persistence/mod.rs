//! Configuration file persistence.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Read the JSON configuration file into `ConfigFile`.
//! - Write `ConfigFile` back atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Merging sources by precedence (see `loader`).
//!
//! Invariants:
//! - Read errors carry the path but never the file contents.
//! - Writes never leave a half-written config file behind.

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file, write_config_file};
pub use path::default_config_path;
