//! Logging configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory for a JSON log file (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,
}

/// Log line format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable text
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}
