//! Shared helpers for the architecture tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Locate the workspace root by walking up to the `Cargo.toml` that declares
/// `[workspace]`.
pub fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");
    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// All `.rs` files under `dir`, skipping build output.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// True when the file holds tests: it sits under a `tests/` directory, is a
/// `*_tests.rs` file, or declares test functions.
pub fn is_test_source(path: &Path, content: &str) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/")
        || path_str.ends_with("_tests.rs")
        || content.contains("#[test]")
        || content.contains("#[tokio::test]")
}

/// Names in the `[dependencies]` table of a `Cargo.toml`.
///
/// Dev and build dependencies are ignored. Dotted keys
/// (`tokio.workspace = true`) and table headers (`[dependencies.tokio]`)
/// both yield `tokio`.
pub fn dependency_names(cargo_toml: &str) -> Vec<String> {
    let manifest: toml::Table = cargo_toml.parse().expect("Cargo.toml is not valid TOML");
    manifest
        .get("dependencies")
        .and_then(toml::Value::as_table)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}
