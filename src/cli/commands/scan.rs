use std::path::PathBuf;

use anyhow::Result;

use super::helper::load_project_config;
use crate::{
    cli::{
        args::ScanCommand,
        exit_status::ExitStatus,
        report::{print_findings, print_scan_summary, print_skipped_warning},
    },
    scanner::{ReportFormat, save_report, scan_directory},
};

/// Scan the source tree and write the report.
///
/// Exits successfully whether or not anything was found. The report format is
/// resolved before scanning, so an unsupported extension fails fast.
pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let config = load_project_config(cmd.verbose)?;

    let root = cmd
        .path
        .unwrap_or_else(|| PathBuf::from(&config.scanner.source_path));
    let output = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&config.scanner.output));
    let format = ReportFormat::from_path(&output)?;

    let outcome = scan_directory(&root, &config.scanner, cmd.verbose)?;

    if cmd.verbose {
        print_findings(&outcome.findings);
    }

    if !outcome.findings.is_empty() {
        save_report(&outcome.findings, &output, format)?;
    }

    print_scan_summary(
        outcome.findings.len(),
        outcome.files_checked,
        &output.display().to_string(),
    );
    print_skipped_warning(outcome.skipped_count, cmd.verbose);

    Ok(ExitStatus::Success)
}
