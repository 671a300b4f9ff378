//! The six reported settings extracted from a [`Settings`] document.

use serde::{Deserialize, Serialize};

use super::settings::Settings;
use crate::domain::errors::SettingsResult;

/// Application section of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppSummary {
    /// `app.name`
    pub name: String,
    /// `app.version`
    pub version: String,
    /// `app.log_level`
    pub log_level: String,
}

/// Database section of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseSummary {
    /// `database.host`
    pub host: String,
    /// `database.port`
    pub port: String,
}

/// Paths section of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathsSummary {
    /// `paths.output_directory`
    pub output_directory: String,
}

/// The six reported settings, rendered as they appear in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSummary {
    /// `app` section
    pub app: AppSummary,
    /// `database` section
    pub database: DatabaseSummary,
    /// `paths` section
    pub paths: PathsSummary,
}

impl SettingsSummary {
    /// Extract the summary, failing on the first absent key
    pub fn from_settings(settings: &Settings) -> SettingsResult<Self> {
        let name = settings.require_display("app.name")?;
        let version = settings.require_display("app.version")?;
        let log_level = settings.require_str("app.log_level")?.to_string();
        let host = settings.require_display("database.host")?;
        let port = settings.require_display("database.port")?;
        let output_directory = settings.require_display("paths.output_directory")?;

        Ok(Self {
            app: AppSummary {
                name,
                version,
                log_level,
            },
            database: DatabaseSummary { host, port },
            paths: PathsSummary { output_directory },
        })
    }

    /// Whether the configured log level is DEBUG, ignoring case
    pub fn is_debug(&self) -> bool {
        self.app.log_level.eq_ignore_ascii_case("debug")
    }

    /// Fixed-text summary lines, in print order
    pub fn lines(&self) -> [String; 4] {
        [
            format!(
                "App Name:        {} (Version {})",
                self.app.name, self.app.version
            ),
            format!(
                "Database Target: {}:{}",
                self.database.host, self.database.port
            ),
            format!("Log Level:       {}", self.app.log_level),
            format!("Output Path:     {}", self.paths.output_directory),
        ]
    }
}
