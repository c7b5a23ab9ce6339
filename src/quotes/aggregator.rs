// src/quotes/aggregator.rs
use std::sync::Arc;

use metrics::counter;

use crate::quotes::{error_chain, LookupError, Quote, QuoteError, QuoteSource};
use crate::random::IndexPicker;

/// Joins a random quote to its speaker's name.
///
/// Every call re-fetches both collections; nothing is cached between calls.
#[derive(Clone)]
pub struct QuoteAggregator {
    source: Arc<dyn QuoteSource>,
    picker: Arc<dyn IndexPicker>,
}

impl QuoteAggregator {
    pub fn new(source: Arc<dyn QuoteSource>, picker: Arc<dyn IndexPicker>) -> Self {
        Self { source, picker }
    }

    /// Fetch quotes, then characters (short-circuiting on the first failure),
    /// pick one quote and resolve its speaker.
    pub async fn random_quote(&self) -> Result<Quote, QuoteError> {
        counter!("quote_requests_total").increment(1);

        let result = self.random_quote_inner().await;
        if let Err(e) = &result {
            tracing::warn!(
                error = %error_chain(e),
                kind = e.kind(),
                source = self.source.name(),
                "random quote failed"
            );
            counter!("quote_failures_total", "kind" => e.kind()).increment(1);
        }
        result
    }

    async fn random_quote_inner(&self) -> Result<Quote, QuoteError> {
        let mut quotes = self.source.fetch_quotes().await?;
        let characters = self.source.fetch_characters().await?;

        let index = self.picker.pick(quotes.len()).ok_or(QuoteError::NoQuotes)?;
        let mut quote = quotes.swap_remove(index);

        match characters.get(&quote.character_id) {
            Some(name) if !name.is_empty() => {
                quote.character_name = name.clone();
                tracing::debug!(
                    character_id = %quote.character_id,
                    picked = index,
                    of = quotes.len() + 1,
                    "quote resolved"
                );
                Ok(quote)
            }
            _ => Err(LookupError {
                character_id: quote.character_id,
            }
            .into()),
        }
    }
}
