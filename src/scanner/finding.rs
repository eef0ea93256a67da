use serde::{Deserialize, Serialize};

/// Which heuristic produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    StringLiteral,
    #[serde(rename = "JSXText")]
    JsxText,
}

impl FindingKind {
    /// Name used in reports, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::StringLiteral => "StringLiteral",
            FindingKind::JsxText => "JSXText",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::StringLiteral => write!(f, "string-literal"),
            FindingKind::JsxText => write!(f, "jsx-text"),
        }
    }
}

/// One suspected untranslated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub text: String,
}

impl Finding {
    pub fn new(file: &str, line: usize, kind: FindingKind, text: &str) -> Self {
        Self {
            file: file.to_string(),
            line,
            kind,
            text: text.trim().to_string(),
        }
    }
}
