use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Liveness check; also reports whether AI text generation is active.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let text_generation = if state.notes.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "ok",
        "service": "notes-service",
        "version": env!("CARGO_PKG_VERSION"),
        "text_generation": text_generation,
    }))
}
