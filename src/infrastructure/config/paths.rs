//! Project-relative location of the settings file.

use std::path::{Path, PathBuf};

/// Directory holding the settings file, relative to the project root
pub const CONFIG_DIR: &str = "configs";

/// Settings file name inside [`CONFIG_DIR`]
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Project root baked in at build time: the crate directory above `src/`
pub fn default_project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// `<project_root>/configs/settings.yaml`
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(SETTINGS_FILE)
}

/// Pick the settings file to read
///
/// An explicit file wins; otherwise the file under the given (or default)
/// project root is used.
pub fn resolve_settings_path(explicit: Option<&Path>, project_root: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => settings_path(project_root.unwrap_or(default_project_root())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_layout() {
        let path = settings_path(Path::new("/srv/project"));
        assert_eq!(path, PathBuf::from("/srv/project/configs/settings.yaml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_settings_path(
            Some(Path::new("/etc/custom.yaml")),
            Some(Path::new("/srv/project")),
        );
        assert_eq!(path, PathBuf::from("/etc/custom.yaml"));
    }

    #[test]
    fn test_default_root_is_crate_dir() {
        let path = resolve_settings_path(None, None);
        assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
        assert!(path.ends_with("configs/settings.yaml"));
    }
}
