use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"
export function App() {
  const title = "Welcome home";
  console.log("Rendering App");
  dispatch({ type: "SET_ACTION_TYPE" });
  return (
    <div className="app">
      <h1>Hello there</h1>
      <p>{t('home.intro')}</p>
      <Button label={t("Save changes")} />
    </div>
  );
}
"#;

#[test]
fn test_scan_writes_json_report() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .scan_command()
        .args(["-p", "src", "-o", "report.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found 2 potential untranslated strings"));

    let report: Value = serde_json::from_str(&test.read_file("report.json")?)?;
    let entries = report.as_array().expect("report should be an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["line"], json!(3));
    assert_eq!(entries[0]["type"], json!("StringLiteral"));
    assert_eq!(entries[0]["text"], json!("Welcome home"));
    assert_eq!(entries[1]["line"], json!(8));
    assert_eq!(entries[1]["type"], json!("JSXText"));
    assert_eq!(entries[1]["text"], json!("Hello there"));
    assert!(
        entries[0]["file"]
            .as_str()
            .is_some_and(|f| f.ends_with("App.tsx"))
    );

    Ok(())
}

#[test]
fn test_scan_writes_csv_report() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .scan_command()
        .args(["--path", "src", "--output", "out/report.csv"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = test.read_file("out/report.csv")?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("file,line,type,text"));
    assert_eq!(lines.count(), 2);

    Ok(())
}

#[test]
fn test_scan_no_findings() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        r#"export const App = () => <p>{t("home.title")}</p>;"#,
    )?;

    let output = test.scan_command().args(["-p", "src"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no obvious untranslated strings found"));
    assert!(!test.root().join("i18n_report.json").exists());

    Ok(())
}

#[test]
fn test_scan_unsupported_output_format() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .scan_command()
        .args(["-p", "src", "-o", "report.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unsupported output format"));
    assert!(!test.root().join("report.txt").exists());

    Ok(())
}

#[test]
fn test_scan_missing_source_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().args(["-p", "nowhere"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Source path is not a directory"));

    Ok(())
}

#[test]
fn test_scan_skips_excluded_dirs_and_other_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.tsx", "<h1>Scanned heading</h1>")?;
    test.write_file("src/node_modules/pkg/Lib.tsx", "<h1>Vendor heading</h1>")?;
    test.write_file("src/dist/Bundle.tsx", "<h1>Built heading</h1>")?;
    test.write_file("src/util.ts", r#"const a = "Not scanned";"#)?;

    let output = test
        .scan_command()
        .args(["-p", "src", "-o", "report.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: Value = serde_json::from_str(&test.read_file("report.json")?)?;
    let texts: Vec<&str> = report
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["text"].as_str())
        .collect();
    assert_eq!(texts, vec!["Scanned heading"]);

    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nkitrc.json",
        r#"{
          "scanner": {
            "sourcePath": "app",
            "output": "reports/i18n.csv",
            "extensions": [".jsx"],
            "ignoreTexts": ["Acme Corp"]
          }
        }"#,
    )?;
    test.write_file(
        "app/Page.jsx",
        "<h1>Acme Corp</h1>\n<p>Contact sales</p>\n",
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let csv = test.read_file("reports/i18n.csv")?;
    assert!(csv.contains("Contact sales"));
    assert!(!csv.contains("Acme Corp"));

    Ok(())
}

#[test]
fn test_scan_verbose_prints_findings() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .scan_command()
        .args(["-p", "src", "-o", "report.json", "-v"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("warning: \"Welcome home\"  string-literal"));
    assert!(out.contains("App.tsx:8"));

    Ok(())
}
