//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use serde::Serialize;

/// Result that can be printed for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;
    /// JSON rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Write `result` to `out` in the selected mode, followed by a newline.
pub fn write_output<T: CommandOutput, W: Write>(
    result: &T,
    json_mode: bool,
    out: &mut W,
) -> io::Result<()> {
    if json_mode {
        let rendered = serde_json::to_string_pretty(&result.to_json()).map_err(io::Error::other)?;
        writeln!(out, "{rendered}")
    } else {
        writeln!(out, "{}", result.to_human())
    }
}

/// Error report for stderr.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    /// Error kind, e.g. `missing_key`
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

impl CommandOutput for ErrorOutput {
    fn to_human(&self) -> String {
        format!("ERROR: {}", self.message)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
