//! Command-line interface
//!
//! Invoked with no arguments the binary reports
//! `<project_root>/configs/settings.yaml`, with the project root fixed at
//! build time. Flags only redirect the input or tune diagnostics.

pub mod output;
pub mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::infrastructure::config::resolve_settings_path;
use crate::infrastructure::logging::{LogConfig, LogFormat};
use output::{write_output, ErrorOutput};
use report::ReportError;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "settings-report")]
#[command(about = "Load the project settings file and print a summary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file to read instead of <project-root>/configs/settings.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root holding configs/settings.yaml
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Diagnostics level on stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Diagnostics format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON diagnostics to a file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Settings file this invocation reads
    pub fn settings_path(&self) -> PathBuf {
        resolve_settings_path(self.config.as_deref(), self.project_root.as_deref())
    }

    /// Logging configuration from the diagnostics flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
        }
    }
}

/// Report `err` on stderr and map it to the process exit status.
pub fn handle_error(err: &ReportError, json_mode: bool) -> ExitCode {
    tracing::debug!(kind = err.kind(), error = %err, "report failed");

    let report = ErrorOutput {
        error: err.kind(),
        message: err.to_string(),
    };
    let mut stderr = io::stderr().lock();
    write_output(&report, json_mode, &mut stderr).ok();
    stderr.flush().ok();

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["settings-report"]).unwrap();

        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(cli.settings_path().ends_with("configs/settings.yaml"));
    }

    #[test]
    fn test_config_flag_overrides_root() {
        let cli = Cli::try_parse_from([
            "settings-report",
            "--project-root",
            "/srv/app",
            "-c",
            "/tmp/other.yaml",
        ])
        .unwrap();

        assert_eq!(cli.settings_path(), Path::new("/tmp/other.yaml"));
    }

    #[test]
    fn test_project_root_flag() {
        let cli = Cli::try_parse_from(["settings-report", "--project-root", "/srv/app"]).unwrap();
        assert_eq!(
            cli.settings_path(),
            Path::new("/srv/app/configs/settings.yaml")
        );
    }

    #[test]
    fn test_log_flags() {
        let cli = Cli::try_parse_from([
            "settings-report",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-dir",
            "/tmp/logs",
        ])
        .unwrap();
        let config = cli.log_config();

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_dir.as_deref(), Some(Path::new("/tmp/logs")));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Cli::try_parse_from(["settings-report", "--log-format", "xml"]).is_err());
    }
}
