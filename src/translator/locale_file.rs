use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// Read and parse a locale JSON file.
pub fn load_locale_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Write a locale tree with 2-space indentation and a trailing newline.
///
/// Non-ASCII text is written as-is rather than `\u` escaped. Parent
/// directories are created if needed.
pub fn save_locale_file(path: &Path, tree: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
