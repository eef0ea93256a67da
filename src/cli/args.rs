//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Report string literals and JSX text that look untranslated
//! - `translate`: Translate source-language locale files into target languages
//! - `init`: Initialize the i18nkit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Source directory to scan (overrides config file, default: ../src/)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Report output file, .json or .csv (overrides config file, default: ./i18n_report.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every finding
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Locale file to translate; may be repeated. Prompts when no file is selected
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Translate every configured locale file
    #[arg(long, conflicts_with = "files")]
    pub all: bool,

    /// Translate into this language only
    #[arg(long, value_name = "CODE", conflicts_with = "exclude")]
    pub lang: Option<String>,

    /// Comma-separated languages to skip
    #[arg(long, value_name = "CODES")]
    pub exclude: Option<String>,

    /// Locales directory containing one folder per language (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Maximum number of concurrent translation tasks (overrides config file)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Translation endpoint base URL (overrides config file)
    #[arg(long, env = "I18NKIT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Print retry attempts
    #[arg(short, long)]
    pub verbose: bool,
}

impl TranslateCommand {
    /// True when neither files nor languages were given on the command line.
    pub fn is_interactive(&self) -> bool {
        self.files.is_empty() && !self.all && self.lang.is_none() && self.exclude.is_none()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find string literals and JSX text that are not wrapped in a translation call
    Scan(ScanCommand),
    /// Translate locale JSON files into the configured target languages
    Translate(TranslateCommand),
    /// Initialize a new .i18nkitrc.json configuration file
    Init,
}
