// tests/common/mod.rs
// Shared in-memory upstream for aggregator and router tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use quote_service::quotes::{
    index_characters, Character, CharacterIndex, FetchError, Quote, QuoteAggregator, QuoteSource,
};
use quote_service::random::FixedPicker;

/// In-memory source with call counters; `fail_quotes` / `fail_characters`
/// make the corresponding fetch return a 503 status error.
#[derive(Default)]
pub struct MemorySource {
    pub quotes: Vec<Quote>,
    pub characters: Vec<Character>,
    pub fail_quotes: bool,
    pub fail_characters: bool,
    pub quote_calls: AtomicUsize,
    pub character_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new(quotes: Vec<Quote>, characters: Vec<Character>) -> Self {
        Self {
            quotes,
            characters,
            ..Default::default()
        }
    }

    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    pub fn character_calls(&self) -> usize {
        self.character_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for MemorySource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_quotes {
            return Err(FetchError::Status {
                url: "memory://quote".into(),
                status: 503,
            });
        }
        Ok(self.quotes.clone())
    }

    async fn fetch_characters(&self) -> Result<CharacterIndex, FetchError> {
        self.character_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_characters {
            return Err(FetchError::Status {
                url: "memory://character".into(),
                status: 503,
            });
        }
        Ok(index_characters(self.characters.clone()))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

pub fn sauron_source() -> MemorySource {
    MemorySource::new(
        vec![Quote::new("One ring...", "C1")],
        vec![Character::new("C1", "Sauron")],
    )
}

pub fn aggregator(source: Arc<MemorySource>, index: usize) -> QuoteAggregator {
    QuoteAggregator::new(source, Arc::new(FixedPicker(index)))
}
