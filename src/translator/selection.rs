//! Which files and languages a translation run covers.

use thiserror::Error;

use crate::config::TranslatorConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown file \"{name}\". Choose one of: {allowed}")]
    UnknownFile { name: String, allowed: String },

    #[error("Unknown language \"{code}\". Choose one of: {allowed}")]
    UnknownLanguage { code: String, allowed: String },

    #[error("No target languages left after exclusions")]
    NoLanguages,

    #[error("No files selected")]
    NoFiles,

    #[error("No input provided")]
    NoInput,
}

/// The files and target languages of one run, both validated against config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub filenames: Vec<String>,
    pub target_langs: Vec<String>,
}

/// How target languages were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// Exactly one language.
    Single(String),
    /// Every configured language except these.
    Excluding(Vec<String>),
}

impl Selection {
    pub fn resolve(
        config: &TranslatorConfig,
        filenames: &[String],
        languages: &LanguageChoice,
    ) -> Result<Self, SelectionError> {
        if filenames.is_empty() {
            return Err(SelectionError::NoFiles);
        }
        for name in filenames {
            validate_filename(config, name)?;
        }

        let target_langs = match languages {
            LanguageChoice::Single(code) => {
                validate_language(config, code)?;
                vec![code.clone()]
            }
            LanguageChoice::Excluding(excluded) => {
                for code in excluded {
                    validate_language(config, code)?;
                }
                let langs: Vec<String> = config
                    .target_langs
                    .iter()
                    .filter(|lang| !excluded.contains(lang))
                    .cloned()
                    .collect();
                if langs.is_empty() {
                    return Err(SelectionError::NoLanguages);
                }
                langs
            }
        };

        let mut unique_files: Vec<String> = Vec::new();
        for name in filenames {
            if !unique_files.contains(name) {
                unique_files.push(name.clone());
            }
        }

        Ok(Self {
            filenames: unique_files,
            target_langs,
        })
    }
}

pub fn validate_filename(config: &TranslatorConfig, name: &str) -> Result<(), SelectionError> {
    if config.filenames.iter().any(|f| f == name) {
        Ok(())
    } else {
        Err(SelectionError::UnknownFile {
            name: name.to_string(),
            allowed: config.filenames.join(", "),
        })
    }
}

pub fn validate_language(config: &TranslatorConfig, code: &str) -> Result<(), SelectionError> {
    if config.target_langs.iter().any(|l| l == code) {
        Ok(())
    } else {
        Err(SelectionError::UnknownLanguage {
            code: code.to_string(),
            allowed: config.target_langs.join(", "),
        })
    }
}

/// Split a comma-separated list, dropping blanks: `"de, fr,,"` → `["de", "fr"]`.
pub fn parse_code_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
