use crate::dtos::{
    InvoiceNotesRequest, NoteResponse, ProductDescriptionRequest, ReminderRequest, TrendsRequest,
};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn invoice_notes(
    State(state): State<AppState>,
    Json(req): Json<InvoiceNotesRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    req.validate()?;

    let outcome = state
        .notes
        .generate_invoice_notes(&req.customer_name, &req.items_description)
        .await;

    Ok(Json(outcome.into()))
}

pub async fn reminder(
    State(state): State<AppState>,
    Json(req): Json<ReminderRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    req.validate()?;

    let outcome = state
        .notes
        .generate_reminder_message(
            &req.customer_name,
            &req.invoice_number,
            req.balance,
            req.days_difference,
        )
        .await;

    Ok(Json(outcome.into()))
}

pub async fn product_description(
    State(state): State<AppState>,
    Json(req): Json<ProductDescriptionRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    req.validate()?;

    let outcome = state
        .notes
        .generate_product_description(&req.product_name)
        .await;

    Ok(Json(outcome.into()))
}

pub async fn invoice_trends(
    State(state): State<AppState>,
    Json(req): Json<TrendsRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    req.validate()?;

    let outcome = state.notes.analyze_invoice_trends(&req.summary).await;

    Ok(Json(outcome.into()))
}
