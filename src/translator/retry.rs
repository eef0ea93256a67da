use std::{thread, time::Duration};

use colored::Colorize;

use super::provider::{ProviderError, TranslationProvider};
use crate::config::TranslatorConfig;

/// Fixed-delay retry budget for a single translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl From<&TranslatorConfig> for RetryPolicy {
    fn from(config: &TranslatorConfig) -> Self {
        Self {
            attempts: config.retry_attempts.max(1),
            delay: config.retry_delay(),
        }
    }
}

/// Result of translating one leaf string.
#[derive(Debug)]
pub enum LeafOutcome {
    Translated(String),
    /// Every attempt failed; carries the original text and the last error.
    Fallback { text: String, error: ProviderError },
}

impl LeafOutcome {
    pub fn into_text(self) -> String {
        match self {
            LeafOutcome::Translated(text) | LeafOutcome::Fallback { text, .. } => text,
        }
    }
}

/// Call the provider up to `policy.attempts` times, sleeping `policy.delay`
/// between attempts. The sleep blocks only the calling thread.
pub fn translate_with_retry(
    provider: &dyn TranslationProvider,
    text: &str,
    source_lang: &str,
    target_lang: &str,
    policy: RetryPolicy,
    verbose: bool,
) -> LeafOutcome {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match provider.translate(text, source_lang, target_lang) {
            Ok(translated) => return LeafOutcome::Translated(translated),
            Err(error) if attempt >= attempts => {
                return LeafOutcome::Fallback {
                    text: text.to_string(),
                    error,
                };
            }
            Err(error) => {
                if verbose {
                    eprintln!(
                        "{} [{}] attempt {}/{} failed: {}",
                        "retry:".bold().cyan(),
                        target_lang,
                        attempt,
                        attempts,
                        error
                    );
                }
                if !policy.delay.is_zero() {
                    thread::sleep(policy.delay);
                }
                attempt += 1;
            }
        }
    }
}
