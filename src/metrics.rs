use anyhow::Result;
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Install the global Prometheus recorder once per process and return its handle.
/// Later calls reuse the first handle.
pub fn install() -> Result<PrometheusHandle> {
    static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();
    let handle = HANDLE.get_or_try_init(|| -> Result<PrometheusHandle> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        describe_counter!("quote_requests_total", "Random quote requests handled.");
        describe_counter!(
            "quote_failures_total",
            "Random quote requests that failed, by kind (fetch|lookup|empty)."
        );
        describe_histogram!(
            "upstream_fetch_ms",
            "Upstream collection fetch time in milliseconds."
        );
        Ok(handle)
    })?;
    Ok(handle.clone())
}

/// Router exposing `/metrics` in the Prometheus exposition format.
pub fn router<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/metrics",
        get(move || {
            let h = handle.clone();
            async move { h.render() }
        }),
    )
}
