use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod scan;
mod translate;

const BIN_NAME: &str = "i18nkit";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops config discovery from walking above the test project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan");
        cmd
    }

    pub fn translate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("translate");
        cmd
    }

    /// Run `cmd` with `input` piped to standard input.
    pub fn run_with_stdin(mut cmd: Command, input: &str) -> Result<Output> {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        child
            .stdin
            .take()
            .context("stdin not captured")?
            .write_all(input.as_bytes())?;
        Ok(child.wait_with_output()?)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
