//! Common test utilities for integration tests
//!
//! Provides fixture projects laid out as `<root>/configs/settings.yaml`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings file with every reported key present
pub const FULL_SETTINGS: &str = r#"app:
  name: "Data Processor"
  version: "1.0.0"
  log_level: "INFO"

database:
  host: "localhost"
  port: 5432

paths:
  output_directory: "./output"
"#;

/// Create a temporary project root containing `configs/settings.yaml`
///
/// Returns the TempDir (cleaned up on drop) and the settings file path.
pub fn project_with_settings(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_settings(dir.path(), content);
    (dir, path)
}

/// Write `content` to `<root>/configs/settings.yaml`
pub fn write_settings(root: &Path, content: &str) -> PathBuf {
    let configs = root.join("configs");
    fs::create_dir_all(&configs).expect("Failed to create configs dir");
    let path = configs.join("settings.yaml");
    fs::write(&path, content).expect("Failed to write settings");
    path
}
