// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod metrics;
pub mod quotes;
pub mod random;

pub use crate::api::router;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tracing::info;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::quotes::{HttpQuoteSource, QuoteAggregator};
use crate::random::SeededPicker;

/// Wire the production app: HTTP upstream source, clock-seeded picker and,
/// when debug routes are on, the Prometheus recorder.
pub fn app(config: &AppConfig) -> Result<Router> {
    let source = HttpQuoteSource::new(&config.upstream)?;
    let aggregator = QuoteAggregator::new(Arc::new(source), Arc::new(SeededPicker::from_clock()));

    let mut state = AppState::new(aggregator);
    if config.debug_routes {
        state = state.with_metrics(crate::metrics::install()?);
        info!("debug routes enabled: /metrics");
    }

    info!(upstream = %config.upstream.base_url, "quote service wired");
    Ok(router(state))
}
