//! Settings file location and loading
//!
//! - Project-relative path resolution (`configs/settings.yaml`)
//! - YAML loading into [`Settings`](crate::domain::models::Settings)

pub mod loader;
pub mod paths;

pub use loader::ConfigLoader;
pub use paths::{resolve_settings_path, settings_path};
