//! HTTP access to the dictionary service.
//!
//! [`DictionaryClient`] is the seam the rest of the app talks to, so lookups
//! can be driven by in-memory clients in tests. [`HttpDictionaryClient`] is
//! the reqwest-backed production implementation.

use crate::config::ApiConfig;
use crate::dictionary::error::LookupError;
use crate::dictionary::model::{ApiError, DictionaryEntry};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

#[async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Fetch every entry the service knows for `word`.
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}

pub struct HttpDictionaryClient {
    http: reqwest::Client,
    base_url: Url,
    language: String,
}

impl HttpDictionaryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("api.base_url '{}' cannot carry a path", config.base_url);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("wordlens/", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            language: config.language.clone(),
        })
    }

    /// `{base}/api/v2/entries/{language}/{word}` with `word` encoded as a
    /// single path segment.
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport(format!("bad base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v2", "entries", self.language.as_str(), word]);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.entry_url(word)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<Vec<DictionaryEntry>>(&body)
                .map_err(|e| LookupError::Transport(format!("malformed response body: {}", e)))
        } else {
            let api_error: ApiError = serde_json::from_slice(&body).unwrap_or_default();
            tracing::debug!(
                status = status.as_u16(),
                detail = api_error.message.as_deref().unwrap_or(""),
                resolution = api_error.resolution.as_deref().unwrap_or(""),
                "service rejected lookup"
            );
            Err(LookupError::Api {
                status: status.as_u16(),
                title: api_error.title,
            })
        }
    }
}
