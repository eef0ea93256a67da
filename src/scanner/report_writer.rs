//! Serializes findings to a JSON or CSV report file.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use thiserror::Error;

use super::finding::Finding;

/// Column order of the CSV report; field names match the JSON objects.
pub const CSV_COLUMNS: [&str; 4] = ["file", "line", "type", "text"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unsupported output format for {path}. Use .json or .csv")]
    UnsupportedFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    /// Pick the format from the output file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(ReportFormat::Json),
            Some("csv") => Ok(ReportFormat::Csv),
            _ => Err(ReportError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Write `findings` to `path` in the given format, creating parent directories.
pub fn save_report(findings: &[Finding], path: &Path, format: ReportFormat) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;
    write_report(findings, file, format)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Write `findings` to any writer.
pub fn write_report<W: Write>(findings: &[Finding], writer: W, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => write_json(findings, writer),
        ReportFormat::Csv => write_csv(findings, writer),
    }
}

fn write_json<W: Write>(findings: &[Finding], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, findings).context("Failed to serialize JSON")?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(findings: &[Finding], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // Written explicitly so an empty report still carries the header row.
    csv_writer.write_record(CSV_COLUMNS)?;
    for finding in findings {
        let line = finding.line.to_string();
        csv_writer.write_record([
            finding.file.as_str(),
            line.as_str(),
            finding.kind.as_str(),
            finding.text.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
