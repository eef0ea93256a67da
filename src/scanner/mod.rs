//! Untranslated-string scanner.
//!
//! Walks a source tree, runs the line heuristics from [`heuristics`] over every
//! matching file and collects the results as [`Finding`]s.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Directory walking with excluded directories and ignore globs
//! - `heuristics`: String literal and JSX text detection
//! - `finding`: The `Finding` record
//! - `report_writer`: JSON / CSV serialization

pub mod file_scanner;
pub mod finding;
pub mod heuristics;
pub mod report_writer;

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::config::ScannerConfig;

pub use file_scanner::{ScanResult, scan_files};
pub use finding::{Finding, FindingKind};
pub use heuristics::LineScanner;
pub use report_writer::{ReportError, ReportFormat, save_report, write_report};

/// Findings of one scan together with the number of files read.
#[derive(Debug)]
pub struct ScanOutcome {
    pub findings: Vec<Finding>,
    pub files_checked: usize,
    pub skipped_count: usize,
}

/// Scan every qualifying file under `root`.
///
/// An unreadable or non-UTF-8 file aborts the scan.
pub fn scan_directory(root: &Path, config: &ScannerConfig, verbose: bool) -> Result<ScanOutcome> {
    let ScanResult {
        files,
        skipped_count,
    } = scan_files(root, config, verbose)?;
    let scanner = LineScanner::new(config);

    let mut findings = Vec::new();
    for file in &files {
        let content =
            fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))?;
        findings.extend(scanner.scan_source(file, &content));
    }

    Ok(ScanOutcome {
        findings,
        files_checked: files.len(),
        skipped_count,
    })
}
