//! Output formatting for pathdump reports.
//!
//! The text format is the structure section followed by one block per file.
//! File contents are written verbatim.

use crate::options::OutputFormat;
use crate::{PathdumpError, Report};
use std::fs;
use std::path::Path;

pub const STRUCTURE_HEADER: &str = "--- File Structure ---";
pub const CONTENTS_HEADER: &str = "--- File Contents ---";

/// Formats the report into a string.
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String, PathdumpError> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Writes the formatted report to a file, replacing any existing one.
pub fn write_report_to_file(
    report: &Report,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), PathdumpError> {
    let content = format_report(report, format)?;
    fs::write(&path, content).map_err(|e| PathdumpError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(report: &Report) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(STRUCTURE_HEADER);
    out.push('\n');
    for line in &report.structure {
        out.push_str(&line.to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(CONTENTS_HEADER);
    out.push('\n');
    for record in &report.contents {
        out.push_str(&format!("\n## {} ##\n", record.path.display()));
        out.push_str(&record.content.to_string());
        out.push('\n');
    }
    out
}
