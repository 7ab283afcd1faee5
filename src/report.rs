//! Output formatting for validation results.
//!
//! Supports two output formats:
//! - Text: one `OK:`/`WARNING:`/`ERROR:` line per diagnostic, optionally colored
//! - JSON: a single structured report for programmatic consumption
//!
//! Both formats go to standard output, errors included.

use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::detect::{Diagnostic, Kind, Severity, ValidationResult};
use crate::document::LoadError;

// =============================================================================
// Text Format
// =============================================================================

/// Write diagnostics one per line, in emission order.
pub fn write_text<W: Write>(
    out: &mut W,
    diagnostics: &[Diagnostic],
    color: bool,
) -> std::io::Result<()> {
    for d in diagnostics {
        if color {
            writeln!(out, "{} {}", colored_label(d.severity), d.message)?;
        } else {
            writeln!(out, "{}", d)?;
        }
    }
    Ok(())
}

fn colored_label(severity: Severity) -> ColoredString {
    let label = severity.label();
    match severity {
        Severity::Ok => label.green(),
        Severity::Warning => label.yellow(),
        Severity::Error => label.red().bold(),
    }
}

/// The single diagnostic printed for a document that failed to load.
pub fn load_error_diagnostic(err: &LoadError) -> Diagnostic {
    Diagnostic::new(Severity::Error, err.to_string())
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    /// Absent when the document never got far enough to be classified.
    pub kind: Option<Kind>,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl JsonReport {
    pub fn from_result(path: &str, result: &ValidationResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: path.to_string(),
            kind: Some(result.kind),
            passed: result.passed(),
            diagnostics: result.diagnostics.clone(),
        }
    }

    pub fn from_load_error(path: &str, err: &LoadError) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: path.to_string(),
            kind: None,
            passed: false,
            diagnostics: vec![load_error_diagnostic(err)],
        }
    }
}

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &JsonReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
