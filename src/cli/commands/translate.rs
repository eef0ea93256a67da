use std::io;

use anyhow::Result;
use colored::Colorize;

use super::helper::load_project_config;
use crate::{
    cli::{
        args::TranslateCommand, exit_status::ExitStatus, prompt::prompt_selection,
        report::print_batch_summary,
    },
    config::{Config, TranslatorConfig},
    translator::{
        LanguageChoice, LibreTranslate, Selection, SelectionError, run_batch,
        selection::parse_code_list,
    },
};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let mut config = load_project_config(cmd.verbose)?;
    apply_overrides(&mut config, &cmd);
    config.validate()?;
    let config = config.translator;

    let selection = if cmd.is_interactive() {
        prompt_selection(&config, &mut io::stdin().lock(), &mut io::stdout())
    } else {
        selection_from_flags(&config, &cmd).map_err(anyhow::Error::from)
    };

    let selection = match selection {
        Ok(selection) => selection,
        Err(err) if err.downcast_ref::<SelectionError>().is_some() => {
            eprintln!("{} {}", "error:".bold().red(), err);
            return Ok(ExitStatus::Failure);
        }
        Err(err) => return Err(err),
    };

    let provider = LibreTranslate::new(&config.provider)?;
    let report = run_batch(&config, &selection, &provider, cmd.verbose)?;
    print_batch_summary(&report);

    if report.failed.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

/// CLI flags take precedence over the config file.
fn apply_overrides(config: &mut Config, cmd: &TranslateCommand) {
    let translator = &mut config.translator;
    if let Some(root) = &cmd.locales_root {
        translator.locales_root = root.to_string_lossy().into_owned();
    }
    if let Some(workers) = cmd.workers {
        translator.max_workers = workers;
    }
    if let Some(endpoint) = &cmd.endpoint {
        translator.provider.endpoint = endpoint.clone();
    }
}

/// Without `--file` or `--all`, every configured file is translated.
fn selection_from_flags(
    config: &TranslatorConfig,
    cmd: &TranslateCommand,
) -> Result<Selection, SelectionError> {
    let files = if cmd.all || cmd.files.is_empty() {
        config.filenames.clone()
    } else {
        cmd.files.clone()
    };

    let languages = match &cmd.lang {
        Some(lang) => LanguageChoice::Single(lang.clone()),
        None => LanguageChoice::Excluding(parse_code_list(cmd.exclude.as_deref().unwrap_or(""))),
    };

    Selection::resolve(config, &files, &languages)
}
