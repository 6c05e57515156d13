//! Notes generation against a local stand-in for the Gemini endpoint.

mod common;

use axum::http::StatusCode;
use common::{notes_config, GeminiStub, StubReply, TEST_API_KEY, TEST_MODEL};
use notes_service::services::prompts::{INVOICE_NOTES_FAILED, INVOICE_NOTES_NOT_CONFIGURED};
use notes_service::services::{DegradedReason, NoteOutcome, NotesGenerator, TextGeneration};
use rust_decimal::Decimal;
use std::time::Duration;

fn generator(config: &notes_service::config::NotesConfig) -> NotesGenerator {
    NotesGenerator::new(TextGeneration::from_config(config).expect("Failed to build provider"))
}

#[tokio::test]
async fn generated_text_is_returned_and_request_is_well_formed() {
    let stub = GeminiStub::replying("Thank you Jane for your order.").await;
    let notes = generator(&stub.config());

    let outcome = notes
        .generate_invoice_notes("Jane Doe", "Mirror 1200x800")
        .await;

    assert_eq!(
        outcome,
        NoteOutcome::Generated("Thank you Jane for your order.".to_string())
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    );
    assert_eq!(requests[0].api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(requests[0].query, None);

    let prompt = requests[0].body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(prompt.contains("Customer: Jane Doe"));
    assert!(prompt.contains("Items ordered: Mirror 1200x800"));
    assert_eq!(requests[0].body["contents"][0]["role"], "user");
}

#[tokio::test]
async fn text_parts_are_concatenated() {
    let stub = GeminiStub::spawn(StubReply::Json(serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": "- Sales up\n"}, {"text": "- 2 unpaid"}]},
            "finishReason": "STOP"
        }]
    })))
    .await;
    let notes = generator(&stub.config());

    let outcome = notes.analyze_invoice_trends("summary").await;
    assert_eq!(outcome.text(), "- Sales up\n- 2 unpaid");
    assert!(!outcome.is_degraded());
}

#[tokio::test]
async fn server_error_uses_failure_fallback() {
    let stub = GeminiStub::spawn(StubReply::Status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "backend exploded".to_string(),
    ))
    .await;
    let notes = generator(&stub.config());

    let outcome = notes.generate_invoice_notes("Jane", "Mirror").await;
    assert_eq!(outcome.text(), INVOICE_NOTES_FAILED);
    assert!(matches!(
        outcome.reason(),
        Some(DegradedReason::ProviderFailed(msg)) if msg.contains("500")
    ));
}

#[tokio::test]
async fn rate_limit_uses_failure_fallback() {
    let stub =
        GeminiStub::spawn(StubReply::Status(StatusCode::TOO_MANY_REQUESTS, String::new())).await;
    let notes = generator(&stub.config());

    let outcome = notes
        .generate_reminder_message("Jane", "INV-1001", Decimal::new(1845, 1), -5)
        .await;
    assert_eq!(
        outcome.text(),
        "Reminder for Invoice INV-1001: Outstanding balance of €184.50 needs attention."
    );
    assert_eq!(
        outcome.reason(),
        Some(&DegradedReason::ProviderFailed("Rate limited".to_string()))
    );
}

#[tokio::test]
async fn response_without_candidates_uses_failure_fallback() {
    let stub = GeminiStub::spawn(StubReply::Json(serde_json::json!({"candidates": []}))).await;
    let notes = generator(&stub.config());

    let outcome = notes.analyze_invoice_trends("summary").await;
    assert_eq!(outcome.text(), "No insights available.");
    assert_eq!(outcome.reason(), Some(&DegradedReason::NoText));
}

#[tokio::test]
async fn malformed_body_uses_failure_fallback() {
    let stub = GeminiStub::spawn(StubReply::Json(serde_json::json!({"candidates": "nope"}))).await;
    let notes = generator(&stub.config());

    let outcome = notes.generate_product_description("Bevelled Mirror").await;
    assert_eq!(outcome.text(), "");
    assert!(matches!(
        outcome.reason(),
        Some(DegradedReason::ProviderFailed(_))
    ));
}

#[tokio::test]
async fn safety_block_uses_failure_fallback() {
    let stub = GeminiStub::spawn(StubReply::Json(serde_json::json!({
        "candidates": [{"finishReason": "SAFETY"}]
    })))
    .await;
    let notes = generator(&stub.config());

    let outcome = notes.generate_invoice_notes("Jane", "Mirror").await;
    assert_eq!(outcome.text(), INVOICE_NOTES_FAILED);
    assert_eq!(
        outcome.reason(),
        Some(&DegradedReason::ProviderFailed("Content filtered".to_string()))
    );
}

#[tokio::test]
async fn unreachable_endpoint_uses_failure_fallback() {
    // Nothing listens on the discard port.
    let config = notes_config(Some(TEST_API_KEY), "http://127.0.0.1:9/v1beta", 2);
    let notes = generator(&config);

    let outcome = notes
        .generate_reminder_message("Jane", "INV-7", Decimal::TEN, 3)
        .await;
    assert_eq!(
        outcome.text(),
        "Reminder for Invoice INV-7: Outstanding balance of €10.00 needs attention."
    );
    assert!(matches!(
        outcome.reason(),
        Some(DegradedReason::ProviderFailed(msg)) if msg.starts_with("Network error")
    ));
}

#[tokio::test]
async fn slow_endpoint_times_out_into_fallback() {
    let stub = GeminiStub::spawn(StubReply::Hang(Duration::from_secs(5))).await;
    let config = notes_config(Some(TEST_API_KEY), &stub.base_url, 1);
    let notes = generator(&config);

    let outcome = notes.generate_invoice_notes("Jane", "Mirror").await;
    assert_eq!(outcome.text(), INVOICE_NOTES_FAILED);
}

#[tokio::test]
async fn missing_key_disables_generation_without_network_calls() {
    let stub = GeminiStub::replying("should never be used").await;
    let config = notes_config(None, &stub.base_url, 5);

    let generation = TextGeneration::from_config(&config).unwrap();
    assert!(!generation.is_enabled());

    let notes = NotesGenerator::new(generation);
    let outcome = notes.generate_invoice_notes("Jane", "Mirror").await;
    assert_eq!(outcome.text(), INVOICE_NOTES_NOT_CONFIGURED);
    assert_eq!(notes.generate_product_description("Mirror").await.text(), "");
    assert!(stub.requests().is_empty());
}
