//! Parallel dispatch of per-language translation tasks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;

use super::{
    locale_file::{load_locale_file, save_locale_file},
    provider::TranslationProvider,
    retry::RetryPolicy,
    selection::Selection,
    tree::{TranslationStats, TreeTranslator},
};
use crate::config::TranslatorConfig;

/// One (file, target language) unit of work.
struct TranslationTask<'a> {
    filename: &'a str,
    target_lang: &'a str,
    source: &'a Value,
    destination: PathBuf,
}

/// A task that wrote its output file.
#[derive(Debug)]
pub struct CompletedTask {
    pub filename: String,
    pub target_lang: String,
    pub destination: PathBuf,
    pub stats: TranslationStats,
}

/// A task whose output could not be written.
#[derive(Debug)]
pub struct FailedTask {
    pub filename: String,
    pub target_lang: String,
    pub error: anyhow::Error,
}

/// A source file that could not be loaded; all of its tasks were skipped.
#[derive(Debug)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<CompletedTask>,
    pub failed: Vec<FailedTask>,
    pub skipped_sources: Vec<SkippedSource>,
}

impl BatchReport {
    pub fn stats(&self) -> TranslationStats {
        self.completed
            .iter()
            .fold(TranslationStats::default(), |mut acc, task| {
                acc.translated += task.stats.translated;
                acc.skipped += task.stats.skipped;
                acc.failed += task.stats.failed;
                acc
            })
    }
}

/// `<locales_root>/<lang>/<filename>`
pub fn locale_path(locales_root: &Path, lang: &str, filename: &str) -> PathBuf {
    locales_root.join(lang).join(filename)
}

/// Translate every selected file into every selected language.
///
/// Each source file is loaded once and shared read-only by its tasks. Tasks
/// run on a pool of at most `config.max_workers` threads; completion order is
/// not defined, so the report is sorted by file then language.
pub fn run_batch(
    config: &TranslatorConfig,
    selection: &Selection,
    provider: &dyn TranslationProvider,
    verbose: bool,
) -> Result<BatchReport> {
    let locales_root = Path::new(&config.locales_root);
    let mut report = BatchReport::default();

    let mut sources: Vec<(&str, Value)> = Vec::new();
    for filename in &selection.filenames {
        let source_path = locale_path(locales_root, &config.source_lang, filename);
        if !source_path.is_file() {
            eprintln!(
                "{} Missing file: {}",
                "warning:".bold().yellow(),
                source_path.display()
            );
            report.skipped_sources.push(SkippedSource {
                path: source_path,
                reason: "file not found".to_string(),
            });
            continue;
        }
        match load_locale_file(&source_path) {
            Ok(tree) => sources.push((filename.as_str(), tree)),
            Err(err) => {
                eprintln!("{} {:#}", "warning:".bold().yellow(), err);
                report.skipped_sources.push(SkippedSource {
                    path: source_path,
                    reason: format!("{:#}", err),
                });
            }
        }
    }

    let tasks: Vec<TranslationTask> = sources
        .iter()
        .flat_map(|(filename, tree)| {
            selection.target_langs.iter().map(move |lang| TranslationTask {
                filename,
                target_lang: lang,
                source: tree,
                destination: locale_path(locales_root, lang, filename),
            })
        })
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .build()
        .context("Failed to start translation worker pool")?;

    let translator = TreeTranslator::new(
        provider,
        &config.source_lang,
        RetryPolicy::from(config),
        verbose,
    );

    let results: Vec<(&TranslationTask, Result<TranslationStats>)> = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| (task, run_task(&translator, task)))
            .collect()
    });

    for (task, result) in results {
        match result {
            Ok(stats) => report.completed.push(CompletedTask {
                filename: task.filename.to_string(),
                target_lang: task.target_lang.to_string(),
                destination: task.destination.clone(),
                stats,
            }),
            Err(error) => {
                eprintln!(
                    "{} [{}] {}: {:#}",
                    "error:".bold().red(),
                    task.target_lang,
                    task.filename,
                    error
                );
                report.failed.push(FailedTask {
                    filename: task.filename.to_string(),
                    target_lang: task.target_lang.to_string(),
                    error,
                });
            }
        }
    }

    report.completed.sort_by(|a, b| {
        a.filename
            .cmp(&b.filename)
            .then_with(|| a.target_lang.cmp(&b.target_lang))
    });
    report.failed.sort_by(|a, b| {
        a.filename
            .cmp(&b.filename)
            .then_with(|| a.target_lang.cmp(&b.target_lang))
    });

    Ok(report)
}

fn run_task(translator: &TreeTranslator, task: &TranslationTask) -> Result<TranslationStats> {
    println!(
        "{} {} → {}",
        "Translating".cyan().bold(),
        task.filename,
        task.target_lang
    );
    let (translated, stats) = translator.translate_tree(task.source, task.target_lang);
    save_locale_file(&task.destination, &translated)?;
    println!("{} {}", "Saved".green().bold(), task.destination.display());
    Ok(stats)
}
