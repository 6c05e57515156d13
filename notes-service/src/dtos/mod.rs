use crate::services::{DegradedReason, NoteOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceNotesRequest {
    #[serde(default)]
    pub customer_name: String,
    #[validate(length(max = 4000))]
    pub items_description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReminderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[validate(length(min = 1, message = "invoice_number must not be empty"))]
    pub invoice_number: String,
    pub balance: Decimal,
    /// Days until the due date; negative when overdue.
    pub days_difference: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductDescriptionRequest {
    #[validate(length(min = 1, max = 200))]
    pub product_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TrendsRequest {
    #[validate(length(max = 20000))]
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSource {
    Generated,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub text: String,
    pub source: NoteSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DegradedReason>,
}

impl From<NoteOutcome> for NoteResponse {
    fn from(outcome: NoteOutcome) -> Self {
        match outcome {
            NoteOutcome::Generated(text) => NoteResponse {
                text,
                source: NoteSource::Generated,
                reason: None,
            },
            NoteOutcome::Degraded { text, reason } => NoteResponse {
                text,
                source: NoteSource::Fallback,
                reason: Some(reason),
            },
        }
    }
}
