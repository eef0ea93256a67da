//! Interactive selection of files and languages for `translate`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{
    config::TranslatorConfig,
    translator::{
        LanguageChoice, Selection, SelectionError,
        selection::{parse_code_list, validate_filename, validate_language},
    },
};

/// Ask for a filename and a language choice, validating each answer.
///
/// An empty language answer switches to an exclusion list, where an empty
/// answer selects every configured language.
pub fn prompt_selection<R: BufRead, W: Write>(
    config: &TranslatorConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Selection> {
    let filename = ask(
        input,
        output,
        &format!("File to translate ({}): ", config.filenames.join(", ")),
    )?;
    validate_filename(config, &filename)?;

    let lang = ask(
        input,
        output,
        &format!(
            "Target language ({}), or press Enter to translate into several: ",
            config.target_langs.join(", ")
        ),
    )?;

    let choice = if lang.is_empty() {
        let excluded = ask(
            input,
            output,
            "Languages to exclude, comma-separated (Enter for none): ",
        )?;
        LanguageChoice::Excluding(parse_code_list(&excluded))
    } else {
        validate_language(config, &lang)?;
        LanguageChoice::Single(lang)
    };

    Ok(Selection::resolve(config, &[filename], &choice)?)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        return Err(SelectionError::NoInput.into());
    }
    Ok(line.trim().to_string())
}
