//! Settings report: load, validate, print.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::cli::output::{write_output, CommandOutput};
use crate::domain::errors::SettingsError;
use crate::domain::models::SettingsSummary;
use crate::infrastructure::config::ConfigLoader;

/// Printed after a successful load
pub const BANNER: &str = "--- Application Settings Loaded ---";
/// Printed after the summary lines
pub const CLOSING_BANNER: &str = "-----------------------------------";
/// Printed when the configured log level is DEBUG
pub const DEBUG_NOTE: &str = "Note: DEBUG mode is active. Be careful with YAML indentation!";

/// Errors from a report run
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading or reading the settings failed
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl ReportError {
    /// Process exit status for this error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Settings(err) => err.exit_code(),
            Self::Output(_) => 1,
        }
    }

    /// Stable snake_case name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Settings(err) => err.kind(),
            Self::Output(_) => "output",
        }
    }
}

/// Completed report, as printed after the opening banner
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput {
    /// File the settings were read from
    pub config_path: PathBuf,
    /// Extracted settings
    pub settings: SettingsSummary,
    /// Whether the DEBUG note applies
    pub debug_mode: bool,
}

impl ReportOutput {
    fn new(config_path: PathBuf, settings: SettingsSummary) -> Self {
        let debug_mode = settings.is_debug();
        Self {
            config_path,
            settings,
            debug_mode,
        }
    }
}

impl CommandOutput for ReportOutput {
    fn to_human(&self) -> String {
        let mut lines = self.settings.lines().to_vec();
        lines.push(CLOSING_BANNER.to_string());
        if self.debug_mode {
            lines.push(format!("\n{DEBUG_NOTE}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Prints the settings summary read through a [`ConfigLoader`]
pub struct Reporter {
    loader: ConfigLoader,
}

impl Reporter {
    /// Reporter reading through `loader`
    pub const fn new(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Human-readable report
    ///
    /// The path line is written before loading and the banner before key
    /// extraction. Whatever was written before a failure stays written.
    #[instrument(skip_all, fields(path = %self.loader.path().display()))]
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ReportOutput, ReportError> {
        writeln!(out, "DEBUG: Config path = {}", self.loader.path().display())?;

        let settings = self.loader.load()?;

        writeln!(out, "\n{BANNER}")?;
        out.flush()?;

        let summary = SettingsSummary::from_settings(&settings)?;
        let report = ReportOutput::new(self.loader.path().to_path_buf(), summary);
        write_output(&report, false, out)?;

        debug!(debug_mode = report.debug_mode, "report printed");
        Ok(report)
    }

    /// JSON report; nothing is written unless every key is present
    #[instrument(skip_all, fields(path = %self.loader.path().display()))]
    pub fn run_json<W: Write>(&self, out: &mut W) -> Result<ReportOutput, ReportError> {
        let settings = self.loader.load()?;
        let summary = SettingsSummary::from_settings(&settings)?;
        let report = ReportOutput::new(self.loader.path().to_path_buf(), summary);
        write_output(&report, true, out)?;

        debug!(debug_mode = report.debug_mode, "report printed");
        Ok(report)
    }
}
