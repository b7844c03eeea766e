//! Prometheus request metrics, compiled in with the `metrics` feature.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Request counters and latency histograms exposed on `/metrics`.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("site")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}
