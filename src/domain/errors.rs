//! Domain errors for loading and reading settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a settings file or reading keys from it.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist
    #[error("Configuration file not found at: {}", .path.display())]
    FileNotFound {
        /// Path that was tried
        path: PathBuf,
    },

    /// The settings file exists but could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed YAML
    #[error("Invalid YAML in config file: {0}")]
    Parse(String),

    /// A required dotted key is absent
    #[error("Missing required key: {0}")]
    MissingKey(String),

    /// A value has the wrong YAML type
    #[error("Invalid value for key '{key}': expected a {expected}")]
    InvalidType {
        /// Dotted key of the offending value
        key: String,
        /// Type that was required
        expected: &'static str,
    },
}

impl SettingsError {
    /// Process exit status for this error.
    ///
    /// File and parse problems exit with 1; a well-formed file that lacks
    /// the expected shape exits with 2.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::FileNotFound { .. } | Self::Io { .. } | Self::Parse(_) => 1,
            Self::MissingKey(_) | Self::InvalidType { .. } => 2,
        }
    }

    /// Stable snake_case name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::Io { .. } => "io",
            Self::Parse(_) => "parse_error",
            Self::MissingKey(_) => "missing_key",
            Self::InvalidType { .. } => "invalid_type",
        }
    }
}

impl From<serde_yaml::Error> for SettingsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
