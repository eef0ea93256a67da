//! Locale translation batcher.
//!
//! Loads source-language locale JSON files, translates every leaf string
//! through a [`TranslationProvider`] and writes one file per target language.
//!
//! ## Module Structure
//!
//! - `provider`: Provider trait and the LibreTranslate HTTP client
//! - `retry`: Fixed-delay retry with passthrough on failure
//! - `tree`: Recursive, shape-preserving tree translation
//! - `locale_file`: Locale JSON loading and writing
//! - `selection`: Validation of requested files and languages
//! - `batch`: Per-language tasks on a bounded worker pool

pub mod batch;
pub mod locale_file;
pub mod provider;
pub mod retry;
pub mod selection;
pub mod tree;

pub use batch::{BatchReport, CompletedTask, FailedTask, SkippedSource, locale_path, run_batch};
pub use provider::{LibreTranslate, ProviderError, TranslationProvider};
pub use retry::{LeafOutcome, RetryPolicy, translate_with_retry};
pub use selection::{LanguageChoice, Selection, SelectionError};
pub use tree::{TranslationStats, TreeTranslator, is_passthrough};
