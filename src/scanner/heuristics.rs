//! Line-level heuristics for spotting user-facing text.
//!
//! Nothing here parses JSX. Two regular expressions run over each line and
//! their matches are filtered by a handful of cheap predicates, so both false
//! positives and false negatives are expected.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use super::finding::{Finding, FindingKind};
use crate::config::ScannerConfig;

/// A quoted string starting with an uppercase letter, at least three characters long.
static STRING_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([A-Z][^"']{2,})["']"#).unwrap());

/// Text between `>` and `<` starting with an uppercase then a lowercase letter.
static JSX_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*([A-Z][a-z].*?)\s*<").unwrap());

/// Applies the scanner heuristics to source text.
pub struct LineScanner {
    /// Call tokens such as `t(` that mark a literal as already translated.
    translation_calls: Vec<String>,
    /// Opening tokens such as `{t(` that mark JSX text as already translated.
    markup_openers: Vec<String>,
    log_calls: Vec<String>,
    ignore_texts: HashSet<String>,
}

impl LineScanner {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            translation_calls: config
                .translation_functions
                .iter()
                .map(|f| format!("{}(", f))
                .collect(),
            markup_openers: config
                .translation_functions
                .iter()
                .map(|f| format!("{{{}(", f))
                .collect(),
            log_calls: config.log_calls.clone(),
            ignore_texts: config.ignore_texts.iter().cloned().collect(),
        }
    }

    /// Scan a whole file's content, reporting 1-based line numbers.
    pub fn scan_source(&self, file: &str, content: &str) -> Vec<Finding> {
        content
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| self.scan_line(file, idx + 1, line))
            .collect()
    }

    /// Scan a single line. String literals are reported before JSX text.
    pub fn scan_line(&self, file: &str, line_number: usize, line: &str) -> Vec<Finding> {
        if self.is_log_line(line) {
            return Vec::new();
        }

        let mut findings = Vec::new();

        for caps in STRING_LITERAL_REGEX.captures_iter(line) {
            let (Some(whole), Some(text)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if self.is_inside_translation_call(&line[..whole.start()]) {
                continue;
            }
            if self.should_ignore(text.as_str()) {
                continue;
            }
            findings.push(Finding::new(
                file,
                line_number,
                FindingKind::StringLiteral,
                text.as_str(),
            ));
        }

        for caps in JSX_TEXT_REGEX.captures_iter(line) {
            let Some(text) = caps.get(1) else {
                continue;
            };
            if self.is_translated_markup(text.as_str()) || self.should_ignore(text.as_str()) {
                continue;
            }
            findings.push(Finding::new(
                file,
                line_number,
                FindingKind::JsxText,
                text.as_str(),
            ));
        }

        findings
    }

    fn is_log_line(&self, line: &str) -> bool {
        self.log_calls.iter().any(|call| line.contains(call.as_str()))
    }

    /// True when `prefix` (the line up to the opening quote) contains a
    /// translation call such as `t(` that is still open, so the literal is
    /// one of its arguments: `t("Welcome")` or `t('key', "Default text")`.
    ///
    /// `alert(` ends in `t(` but is not a call to `t`, so the token must not be
    /// the tail of a longer identifier.
    fn is_inside_translation_call(&self, prefix: &str) -> bool {
        self.translation_calls.iter().any(|call| {
            prefix.match_indices(call.as_str()).any(|(start, _)| {
                !prefix[..start].ends_with(is_identifier_char)
                    && is_unclosed(&prefix[start + call.len()..])
            })
        })
    }

    fn is_translated_markup(&self, text: &str) -> bool {
        let text = text.trim_start();
        self.markup_openers
            .iter()
            .any(|opener| text.starts_with(opener.as_str()))
    }

    fn should_ignore(&self, text: &str) -> bool {
        is_ignorable(text) || self.ignore_texts.contains(text.trim())
    }
}

/// Whether the arguments text never closes the call it follows.
fn is_unclosed(args: &str) -> bool {
    let mut depth = 0usize;
    for c in args.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return false,
            ')' => depth -= 1,
            _ => {}
        }
    }
    true
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Action-type constants like `SET_ACTION_TYPE`: only uppercase letters,
/// digits and underscores, with "action" somewhere in the name.
pub fn is_ignorable(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && text.to_ascii_lowercase().contains("action")
}
