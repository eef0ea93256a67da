//! Console output for the CLI commands.
//!
//! Kept apart from the scanner and translator so both can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::scanner::Finding;
use crate::translator::BatchReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print findings cargo-style, one block per finding.
pub fn print_findings(findings: &[Finding]) {
    print_findings_to(findings, &mut io::stdout().lock());
}

pub fn print_findings_to<W: Write>(findings: &[Finding], writer: &mut W) {
    for finding in findings {
        let _ = writeln!(
            writer,
            "{}: \"{}\"  {}",
            "warning".bold().yellow(),
            finding.text,
            finding.kind.to_string().dimmed().cyan()
        );
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            finding.file,
            finding.line
        );
        let _ = writeln!(writer);
    }
}

/// Print the one-line scan summary.
pub fn print_scan_summary(findings: usize, files_checked: usize, report_path: &str) {
    print_scan_summary_to(findings, files_checked, report_path, &mut io::stdout().lock());
}

pub fn print_scan_summary_to<W: Write>(
    findings: usize,
    files_checked: usize,
    report_path: &str,
    writer: &mut W,
) {
    let files = format!(
        "{} source {}",
        files_checked,
        if files_checked == 1 { "file" } else { "files" }
    );
    let msg = if findings == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - no obvious untranslated strings found", files).green()
        )
    } else {
        format!(
            "{} Found {} potential untranslated {} in {}. Report saved to {}",
            FAILURE_MARK.yellow(),
            findings,
            if findings == 1 { "string" } else { "strings" },
            files,
            report_path.bold()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about paths that could not be accessed during the walk.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the totals of a translation batch.
pub fn print_batch_summary(report: &BatchReport) {
    print_batch_summary_to(report, &mut io::stdout().lock());
}

pub fn print_batch_summary_to<W: Write>(report: &BatchReport, writer: &mut W) {
    let stats = report.stats();
    let files = report.completed.len();
    let mark = if report.failed.is_empty() && report.skipped_sources.is_empty() {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };

    let _ = writeln!(
        writer,
        "\n{} Wrote {} {} ({} translated, {} kept as-is, {} failed)",
        mark,
        files,
        if files == 1 { "file" } else { "files" },
        stats.translated,
        stats.skipped,
        stats.failed
    );

    if !report.skipped_sources.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {} source file(s) skipped",
            "-".dimmed(),
            report.skipped_sources.len()
        );
    }
    if !report.failed.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {} task(s) could not be written",
            "-".dimmed(),
            report.failed.len()
        );
    }
}
