// src/quotes/upstream.rs
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::histogram;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::quotes::types::{index_characters, Character, CharacterIndex, Docs, Quote};
use crate::quotes::{FetchError, QuoteSource};

/// `QuoteSource` backed by the One API over HTTPS with bearer auth.
#[derive(Clone)]
pub struct HttpQuoteSource {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HttpQuoteSource {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("quote-service/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.timeout)
            .build()
            .context("building upstream http client")?;
        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            client,
        })
    }

    async fn get_docs<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let t0 = Instant::now();

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source: source.without_url(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream non-success status");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|source| FetchError::Transport {
            url: url.clone(),
            source: source.without_url(),
        })?;
        let env: Docs<T> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("upstream_fetch_ms", "collection" => endpoint).record(ms);
        tracing::debug!(%url, count = env.docs.len(), ms, "upstream fetch ok");
        Ok(env.docs)
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        self.get_docs::<Quote>("/quote").await
    }

    async fn fetch_characters(&self) -> Result<CharacterIndex, FetchError> {
        let characters = self.get_docs::<Character>("/character").await?;
        Ok(index_characters(characters))
    }

    fn name(&self) -> &'static str {
        "the-one-api"
    }
}
