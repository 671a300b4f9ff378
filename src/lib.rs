//! settings-report - project settings loader and reporter
//!
//! Reads `<project_root>/configs/settings.yaml`, checks that the expected
//! keys are present, and prints a short summary.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): parsed settings, extracted summary, errors
//! - **Infrastructure Layer** (`infrastructure`): file resolution, loading, logging
//! - **CLI Layer** (`cli`): argument parsing, report printing, exit codes
//!
//! # Example
//!
//! ```no_run
//! use settings_report::cli::report::Reporter;
//! use settings_report::infrastructure::config::ConfigLoader;
//!
//! let reporter = Reporter::new(ConfigLoader::new("configs/settings.yaml"));
//! let mut out = std::io::stdout();
//! reporter.run(&mut out)?;
//! # Ok::<(), settings_report::cli::report::ReportError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use cli::report::{ReportError, ReportOutput, Reporter};
pub use domain::errors::{SettingsError, SettingsResult};
pub use domain::models::{Settings, SettingsSummary};
pub use infrastructure::config::ConfigLoader;
