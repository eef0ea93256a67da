use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScannerConfig;

/// Result of walking the source tree.
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Collect every file under `root` whose name ends with one of the configured
/// extensions.
///
/// Directories named in `excluded_dirs` are pruned wherever they appear, and
/// paths matching an `ignores` glob pattern are skipped. Patterns are tried
/// against the path relative to `root` and against the full path.
pub fn scan_files(root: &Path, config: &ScannerConfig, verbose: bool) -> Result<ScanResult> {
    if !root.is_dir() {
        bail!("Source path is not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &config.ignores {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, &config.excluded_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();
        let relative = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        if glob_patterns
            .iter()
            .any(|p| p.matches(&relative) || p.matches(&path_str))
        {
            continue;
        }

        if entry.file_type().is_file() && has_scannable_extension(path, &config.extensions) {
            files.push(path_str.into_owned());
        }
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_excluded_dir(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    // The root itself is never pruned, even if its name is excluded.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded_dirs.iter().any(|d| d == name))
}

fn has_scannable_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
}
