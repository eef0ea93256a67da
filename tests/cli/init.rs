use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .i18nkitrc.json"));

    let content = test.read_file(".i18nkitrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed["scanner"].get("excludedDirs").is_some());
    assert!(parsed["translator"].get("targetLangs").is_some());
    assert!(
        content.contains("\n  \"scanner\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nkitrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".i18nkitrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/App.tsx", "<p>Hello there</p>")?;

    let output = test.scan_command().args(["-p", "src"]).output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("i18n_report.json").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}
