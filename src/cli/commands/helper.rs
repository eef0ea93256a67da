use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Load `.i18nkitrc.json` from the current directory or its parents,
/// falling back to defaults when none is found.
pub fn load_project_config(verbose: bool) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    if verbose && !loaded.from_file {
        eprintln!(
            "{} No {} found, using defaults",
            "note:".bold(),
            CONFIG_FILE_NAME
        );
    }

    Ok(loaded.config)
}
