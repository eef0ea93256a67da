//! Translation providers.
//!
//! The batcher only needs `translate(text, source, target)`. The bundled
//! implementation talks to a LibreTranslate-compatible HTTP endpoint.

use std::{collections::BTreeMap, time::Duration};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ProviderConfig;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A service able to translate a single piece of text.
///
/// Implementations are shared across worker threads.
pub trait TranslationProvider: Send + Sync {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
    -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: Option<String>,
    error: Option<String>,
}

/// Client for `POST <endpoint>/translate` on a LibreTranslate server.
pub struct LibreTranslate {
    client: Client,
    url: String,
    api_key: Option<String>,
    language_aliases: BTreeMap<String, String>,
}

impl LibreTranslate {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        // reqwest's blocking client defaults to a 30s timeout; unset means wait forever.
        builder = builder.timeout(config.timeout_secs.map(Duration::from_secs));
        let client = builder
            .build()
            .context("Failed to build translation HTTP client")?;

        Ok(Self {
            client,
            url: format!("{}/translate", config.endpoint.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            language_aliases: config.language_aliases.clone(),
        })
    }

    /// Language code as the provider expects it, e.g. `zh_CN` → `zh`.
    fn provider_code<'a>(&'a self, lang: &'a str) -> &'a str {
        self.language_aliases
            .get(lang)
            .map(String::as_str)
            .unwrap_or(lang)
    }
}

impl TranslationProvider for LibreTranslate {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: self.provider_code(source_lang),
            target: self.provider_code(target_lang),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.client.post(&self.url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: TranslateResponse = response.json()?;
        parse_response(body)
    }
}

fn parse_response(body: TranslateResponse) -> Result<String, ProviderError> {
    match (body.translated_text, body.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(ProviderError::MalformedResponse(error)),
        (None, None) => Err(ProviderError::MalformedResponse(
            "missing 'translatedText' field".to_string(),
        )),
    }
}
