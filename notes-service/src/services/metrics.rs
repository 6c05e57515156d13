//! Notes metrics recorded through the global `metrics` recorder.

use metrics::{counter, histogram};

/// Count a finished notes operation. `reason` is empty for generated text.
pub fn record_note(operation: &'static str, source: &'static str, reason: &'static str) {
    counter!(
        "notes_requests_total",
        "operation" => operation,
        "source" => source,
        "reason" => reason
    )
    .increment(1);
}

pub fn record_provider_latency(model: &str, duration_secs: f64) {
    histogram!("notes_provider_latency_seconds", "model" => model.to_string())
        .record(duration_secs);
}

pub fn record_provider_error(error_type: &'static str) {
    counter!("notes_provider_errors_total", "error_type" => error_type).increment(1);
}

/// Token usage reported by the provider.
pub fn record_tokens(model: &str, input_tokens: i32, output_tokens: i32) {
    counter!("notes_tokens_total", "model" => model.to_string(), "type" => "input")
        .increment(input_tokens.max(0) as u64);
    counter!("notes_tokens_total", "model" => model.to_string(), "type" => "output")
        .increment(output_tokens.max(0) as u64);
}
