//! Recursive translation of a locale tree.

use colored::Colorize;
use serde_json::{Map, Value};

use super::{
    provider::TranslationProvider,
    retry::{LeafOutcome, RetryPolicy, translate_with_retry},
};

/// Leaf counters for one translated tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslationStats {
    pub translated: usize,
    /// Blank, placeholder or markup leaves copied unchanged.
    pub skipped: usize,
    /// Leaves kept in the source language after every attempt failed.
    pub failed: usize,
}

/// Whether a leaf string is copied as-is instead of being sent to the provider.
///
/// Blank strings, `{{placeholder}}` templates and anything containing markup
/// angle brackets are never translated.
pub fn is_passthrough(text: &str) -> bool {
    text.trim().is_empty()
        || text.contains("{{")
        || text.contains("}}")
        || text.contains('<')
        || text.contains('>')
}

/// Walks a JSON tree and translates every leaf string.
pub struct TreeTranslator<'a> {
    provider: &'a dyn TranslationProvider,
    source_lang: &'a str,
    policy: RetryPolicy,
    verbose: bool,
}

impl<'a> TreeTranslator<'a> {
    pub fn new(
        provider: &'a dyn TranslationProvider,
        source_lang: &'a str,
        policy: RetryPolicy,
        verbose: bool,
    ) -> Self {
        Self {
            provider,
            source_lang,
            policy,
            verbose,
        }
    }

    /// Build a tree with the same shape as `tree` whose leaf strings are
    /// translated into `target_lang`. Object key order is preserved.
    pub fn translate_tree(&self, tree: &Value, target_lang: &str) -> (Value, TranslationStats) {
        let mut stats = TranslationStats::default();
        let translated = self.walk(tree, target_lang, &mut stats);
        (translated, stats)
    }

    fn walk(&self, value: &Value, target_lang: &str, stats: &mut TranslationStats) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, child) in map {
                    out.insert(key.clone(), self.walk(child, target_lang, stats));
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.walk(item, target_lang, stats))
                    .collect(),
            ),
            Value::String(text) => Value::String(self.translate_leaf(text, target_lang, stats)),
            other => other.clone(),
        }
    }

    fn translate_leaf(&self, text: &str, target_lang: &str, stats: &mut TranslationStats) -> String {
        if is_passthrough(text) {
            stats.skipped += 1;
            return text.to_string();
        }

        match translate_with_retry(
            self.provider,
            text,
            self.source_lang,
            target_lang,
            self.policy,
            self.verbose,
        ) {
            LeafOutcome::Translated(translated) => {
                stats.translated += 1;
                translated
            }
            LeafOutcome::Fallback { text, error } => {
                stats.failed += 1;
                eprintln!(
                    "{} [{}] keeping \"{}\" untranslated: {}",
                    "warning:".bold().yellow(),
                    target_lang,
                    text,
                    error
                );
                text
            }
        }
    }
}
