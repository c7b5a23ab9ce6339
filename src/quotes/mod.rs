// src/quotes/mod.rs
pub mod aggregator;
pub mod error;
pub mod types;
pub mod upstream;

pub use aggregator::QuoteAggregator;
pub use error::{error_chain, FetchError, LookupError, QuoteError};
pub use types::{index_characters, Character, CharacterIndex, Quote};
pub use upstream::HttpQuoteSource;

/// Read-only access to the two upstream collections.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Every quote, in one call. No pagination.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError>;

    /// Every character, folded into an id -> name index.
    async fn fetch_characters(&self) -> Result<CharacterIndex, FetchError>;

    fn name(&self) -> &'static str;
}
