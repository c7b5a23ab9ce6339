// src/quotes/error.rs
use std::error::Error as StdError;

use thiserror::Error;

/// Failure talking to the upstream quotes API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream {url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The selected quote references a character the index does not know.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("character not found: {character_id}")]
pub struct LookupError {
    pub character_id: String,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("upstream returned no quotes")]
    NoQuotes,
}

impl QuoteError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::Fetch(_) => "fetch",
            QuoteError::Lookup(_) => "lookup",
            QuoteError::NoQuotes => "empty",
        }
    }
}

/// Render an error and every `source()` below it as `outer: inner: ...`.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}
