//! Prometheus recorder shared by the services.
//!
//! Services record through the `metrics` macros; the recorder installed here
//! renders everything recorded so far for the `/metrics` endpoint.

use crate::error::AppError;
use axum::{http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder.
///
/// Safe to call more than once; only the first call installs a recorder.
pub fn init_metrics() -> Result<(), AppError> {
    let mut install_error = None;

    METRICS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        if let Err(e) = metrics::set_global_recorder(recorder) {
            install_error = Some(e.to_string());
        }
        handle
    });

    match install_error {
        Some(e) => Err(AppError::InternalError(anyhow::anyhow!(
            "Failed to install Prometheus recorder: {}",
            e
        ))),
        None => Ok(()),
    }
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Metrics endpoint for Prometheus scraping.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        get_metrics(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_counters_are_rendered() {
        init_metrics().unwrap();
        init_metrics().unwrap();

        metrics::counter!("service_core_test_total", "kind" => "unit").increment(2);

        let rendered = get_metrics();
        assert!(rendered.contains("service_core_test_total{kind=\"unit\"} 2"));
    }
}
