//! Rendering metrics recorded through the global `metrics` recorder.

use metrics::{counter, histogram};

/// Count one render attempt and observe its duration.
pub fn record_render(content_type: &'static str, success: bool, duration_secs: f64) {
    let status = if success { "ok" } else { "error" };
    counter!(
        "documents_rendered_total",
        "content_type" => content_type,
        "status" => status
    )
    .increment(1);
    histogram!("document_render_duration_seconds", "content_type" => content_type)
        .record(duration_secs);
}

pub fn record_document_size(content_type: &'static str, size_bytes: usize) {
    histogram!("document_size_bytes", "content_type" => content_type).record(size_bytes as f64);
}

pub fn record_saved() {
    counter!("documents_saved_total").increment(1);
}
