//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Settings file resolution and loading
//! - Logging infrastructure

pub mod config;
pub mod logging;
