//! i18nkit - i18n maintenance tools for React projects
//!
//! Two independent tools share this crate: a heuristic scanner that reports
//! probably-untranslated string literals and JSX text, and a batch translator
//! that turns a source-language locale JSON tree into one translated tree per
//! target language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Untranslated-string detection and report writing
//! - `translator`: Recursive locale translation and parallel dispatch

pub mod cli;
pub mod config;
pub mod scanner;
pub mod translator;
