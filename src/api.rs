use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::quotes::{error_chain, QuoteAggregator};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<QuoteAggregator>,
    /// When present, `/metrics` is mounted.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(aggregator: QuoteAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", any(home))
        .route("/quote", any(random_quote))
        .route("/health", get(|| async { "ok" }));

    if let Some(handle) = state.metrics.clone() {
        router = router.merge(crate::metrics::router(handle));
    }

    // Unmatched paths fall through to the greeting, like a root catch-all,
    // whatever the method.
    router
        .fallback(home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    "hello world"
}

async fn random_quote(State(state): State<AppState>) -> Response {
    match state.aggregator.random_quote().await {
        Ok(quote) => quote.attributed_line().into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, error_chain(&e)).into_response(),
    }
}
