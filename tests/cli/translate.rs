use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

/// Config pointing at a local locales dir and an endpoint nothing listens on.
const CONFIG: &str = r#"{
  "translator": {
    "localesRoot": "locales",
    "targetLangs": ["de", "fr"],
    "filenames": ["core.json", "auth.json"],
    "retryDelayMs": 0,
    "provider": { "endpoint": "http://127.0.0.1:9" }
  }
}"#;

#[test]
fn test_translate_unknown_file_flag() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = test
        .translate_command()
        .args(["--file", "secrets.json", "--lang", "de"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown file \"secrets.json\""));
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[test]
fn test_translate_unknown_language_flag() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = test
        .translate_command()
        .args(["--all", "--exclude", "de,xx"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown language \"xx\""));

    Ok(())
}

#[test]
fn test_translate_interactive_rejects_unknown_file() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = CliTest::run_with_stdin(test.translate_command(), "group.json\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("File to translate (core.json, auth.json)"));
    assert!(stderr(&output).contains("Unknown file \"group.json\""));

    Ok(())
}

#[test]
fn test_translate_interactive_missing_source_is_skipped() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = CliTest::run_with_stdin(test.translate_command(), "core.json\nde\n")?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Missing file"));
    assert!(stdout(&output).contains("Wrote 0 files"));
    assert!(!test.root().join("locales/de/core.json").exists());

    Ok(())
}

#[test]
fn test_translate_provider_unreachable_keeps_source_text() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;
    test.write_file(
        "locales/en/core.json",
        r#"{"greeting": "Hello {{name}}", "title": "Welcome"}"#,
    )?;

    let output = test
        .translate_command()
        .args(["--file", "core.json", "--lang", "fr"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("keeping \"Welcome\" untranslated"));

    let written = test.read_file("locales/fr/core.json")?;
    assert_eq!(
        written,
        "{\n  \"greeting\": \"Hello {{name}}\",\n  \"title\": \"Welcome\"\n}\n"
    );
    assert!(stdout(&output).contains("1 kept as-is, 1 failed"));

    Ok(())
}

#[test]
fn test_translate_invalid_worker_count() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = test
        .translate_command()
        .args(["--all", "--workers", "0"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("maxWorkers"));

    Ok(())
}

#[test]
fn test_translate_interactive_closed_stdin() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", CONFIG)?;

    let output = CliTest::run_with_stdin(test.translate_command(), "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No input provided"));
    assert!(!stderr(&output).contains("Error:"));

    Ok(())
}
