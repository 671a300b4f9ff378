//! YAML settings file loader.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::errors::{SettingsError, SettingsResult};
use crate::domain::models::Settings;

/// Settings file loader bound to an explicit path
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Loader for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the settings file
    ///
    /// The file handle is closed before parsing starts, so it is released
    /// on every exit path.
    pub fn load(&self) -> SettingsResult<Settings> {
        debug!(path = %self.path.display(), "loading settings");

        let content = self.read_to_string()?;
        let settings = Settings::from_yaml_str(&content)?;

        info!(
            path = %self.path.display(),
            sections = settings.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    fn read_to_string(&self) -> SettingsResult<String> {
        let mut file = File::open(&self.path).map_err(|source| self.io_error(source))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| self.io_error(source))?;
        Ok(content)
    }

    fn io_error(&self, source: io::Error) -> SettingsError {
        if source.kind() == io::ErrorKind::NotFound {
            SettingsError::FileNotFound {
                path: self.path.clone(),
            }
        } else {
            SettingsError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "app:\n  name: Loader\n  version: 3\n  log_level: WARN\ndatabase:\n  host: h\n  port: 1\n"
        )
        .unwrap();
        file.flush().unwrap();

        let loader = ConfigLoader::new(file.path());
        let settings = loader.load().expect("settings should load");

        assert_eq!(settings.require_str("app.name").unwrap(), "Loader");
        assert_eq!(settings.require_display("app.version").unwrap(), "3");
        assert_eq!(loader.path(), file.path());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configs").join("settings.yaml");

        match ConfigLoader::new(&path).load() {
            Err(SettingsError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();

        let result = ConfigLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0x3a, 0x20, 0xff, 0xfe, 0x0a]).unwrap();
        file.flush().unwrap();

        let result = ConfigLoader::new(file.path()).load();
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "app:\n  name: x\n  version: [1, 2\n").unwrap();
        file.flush().unwrap();

        match ConfigLoader::new(file.path()).load() {
            Err(err @ SettingsError::Parse(_)) => {
                assert!(err.to_string().starts_with("Invalid YAML in config file: "));
            }
            other => panic!("Expected Parse, got {other:?}"),
        }
    }
}
