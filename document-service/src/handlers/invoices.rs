use crate::models::Invoice;
use crate::render::{DocumentBackend, PageLayout};
use crate::services::InvoiceDocument;
use crate::startup::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use service_core::error::AppError;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub url: String,
}

fn layout(state: &AppState, invoice: &Invoice) -> Result<InvoiceDocument, AppError> {
    invoice.validate()?;
    if invoice.file_stem().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "invoiceNumber {:?} has no characters usable in a file name",
            invoice.invoice_number
        )));
    }
    Ok(state.renderer.create_today(invoice))
}

/// Rendered PDF as an attachment named after the invoice.
pub async fn invoice_pdf(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<Response, AppError> {
    let document = layout(&state, &invoice)?;
    let bytes = document.render_with(state.backend.as_ref())?;

    tracing::info!(
        invoice_number = %invoice.invoice_number,
        size_bytes = bytes.len(),
        "Rendered invoice PDF"
    );

    let disposition = format!("attachment; filename=\"{}\"", document.file_name());
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(state.backend.content_type()),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

pub async fn invoice_preview(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<Json<PreviewResponse>, AppError> {
    let document = layout(&state, &invoice)?;
    let url = document.preview_url()?;

    Ok(Json(PreviewResponse { url }))
}

/// Draw commands of the page, for inspecting the layout without a PDF viewer.
pub async fn invoice_layout(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<Json<PageLayout>, AppError> {
    let document = layout(&state, &invoice)?;

    Ok(Json(document.page().clone()))
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub file_name: String,
    pub path: String,
}

/// Saves the PDF into the configured output directory.
pub async fn invoice_download(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<Json<DownloadResponse>, AppError> {
    let document = layout(&state, &invoice)?;
    let path = document.save_to(&state.config.output_dir).await?;

    Ok(Json(DownloadResponse {
        file_name: document.file_name().to_string(),
        path: path.display().to_string(),
    }))
}
