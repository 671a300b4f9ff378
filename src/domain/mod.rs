//! Domain layer for settings reporting
//!
//! This module contains the parsed settings model, the extracted summary,
//! and the errors raised while reading them.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{SettingsError, SettingsResult};
