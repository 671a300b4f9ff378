//! Settings document and summary models.

pub mod settings;
pub mod summary;

pub use settings::Settings;
pub use summary::{AppSummary, DatabaseSummary, PathsSummary, SettingsSummary};
