use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nkitrc.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Settings for the untranslated-string scanner.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    #[serde(default = "default_source_path")]
    pub source_path: String,
    #[serde(default = "default_report_output")]
    pub output: String,
    /// File name suffixes that are scanned, e.g. `.tsx`.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names pruned anywhere in the tree.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    /// Glob patterns matched against full paths.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    /// Lines containing any of these substrings are skipped.
    #[serde(default = "default_log_calls")]
    pub log_calls: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
}

/// Settings for the locale translation batcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_langs")]
    pub target_langs: Vec<String>,
    /// Locale files that may be translated, relative to each language directory.
    #[serde(default = "default_filenames")]
    pub filenames: Vec<String>,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Connection settings for a LibreTranslate-compatible endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// No timeout when unset; a stalled request blocks its task.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maps configured language codes to the codes the provider expects.
    #[serde(default = "default_language_aliases")]
    pub language_aliases: BTreeMap<String, String>,
}

fn default_source_path() -> String {
    "../src/".to_string()
}

fn default_report_output() -> String {
    "./i18n_report.json".to_string()
}

fn default_extensions() -> Vec<String> {
    [".tsx"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    ["node_modules", "build", "dist"].map(String::from).to_vec()
}

fn default_translation_functions() -> Vec<String> {
    ["t", "i18next.t"].map(String::from).to_vec()
}

fn default_log_calls() -> Vec<String> {
    [
        "console.log(",
        "console.error(",
        "console.warn(",
        "console.info(",
        "console.debug(",
    ]
    .map(String::from)
    .to_vec()
}

fn default_locales_root() -> String {
    "../src/i18n/locales".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_langs() -> Vec<String> {
    ["de", "es", "fr", "it", "ja", "ru", "zh_CN"]
        .map(String::from)
        .to_vec()
}

fn default_filenames() -> Vec<String> {
    [
        "auth.json",
        "core.json",
        "group.json",
        "question.json",
        "tutorial.json",
    ]
    .map(String::from)
    .to_vec()
}

fn default_max_workers() -> usize {
    12
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2000
}

fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_language_aliases() -> BTreeMap<String, String> {
    BTreeMap::from([("zh_CN".to_string(), "zh".to_string())])
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            output: default_report_output(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            translation_functions: default_translation_functions(),
            log_calls: default_log_calls(),
            ignore_texts: Vec::new(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            source_lang: default_source_lang(),
            target_langs: default_target_langs(),
            filenames: default_filenames(),
            max_workers: default_max_workers(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: None,
            language_aliases: default_language_aliases(),
        }
    }
}

impl TranslatorConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns and settings that would make a run do nothing
    /// or never finish a translation call.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scanner.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        if self.scanner.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        let translator = &self.translator;
        if translator.target_langs.is_empty() {
            bail!("'targetLangs' must list at least one language");
        }
        if translator.target_langs.contains(&translator.source_lang) {
            bail!(
                "'targetLangs' must not contain the source language \"{}\"",
                translator.source_lang
            );
        }
        if translator.max_workers == 0 {
            bail!("'maxWorkers' must be greater than 0");
        }
        if translator.retry_attempts == 0 {
            bail!("'retryAttempts' must be greater than 0");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
