//! Invoice document handle and the actions offered on it.

use super::metrics;
use crate::models::Invoice;
use crate::render::{
    build_invoice_page, CompanyProfile, DocumentBackend, LayoutConstants, PageLayout, PdfBackend,
    RenderError,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Local, NaiveDate};
use service_core::error::AppError;
use std::path::{Path, PathBuf};
use std::time::Instant;

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::InternalError(anyhow::anyhow!(err))
    }
}

/// A laid-out invoice ready to be serialized.
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    page: PageLayout,
    title: String,
    file_name: String,
}

impl InvoiceDocument {
    pub fn page(&self) -> &PageLayout {
        &self.page
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `{invoiceNumber}.pdf`, safe to use as a file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn render_with(&self, backend: &dyn DocumentBackend) -> Result<Vec<u8>, RenderError> {
        let start = Instant::now();
        let result = backend.render(&self.page, &self.title);
        let elapsed = start.elapsed().as_secs_f64();

        let content_type = backend.content_type();
        match &result {
            Ok(bytes) => {
                metrics::record_render(content_type, true, elapsed);
                metrics::record_document_size(content_type, bytes.len());
            }
            Err(e) => {
                metrics::record_render(content_type, false, elapsed);
                tracing::error!(title = %self.title, error = %e, "Rendering failed");
            }
        }

        result
    }

    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, RenderError> {
        self.render_with(&PdfBackend)
    }

    /// Write the PDF into `dir` and return the full path.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let bytes = self.to_pdf_bytes()?;

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &bytes).await?;
        metrics::record_saved();

        tracing::info!(
            path = %path.display(),
            size_bytes = bytes.len(),
            "Invoice PDF written"
        );

        Ok(path)
    }

    /// `data:application/pdf;base64,...` for inline display.
    pub fn preview_url(&self) -> Result<String, RenderError> {
        let bytes = self.to_pdf_bytes()?;
        Ok(format!("data:application/pdf;base64,{}", STANDARD.encode(bytes)))
    }
}

/// Lays out invoices with a fixed company profile.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    layout: LayoutConstants,
    company: CompanyProfile,
}

impl DocumentRenderer {
    pub fn new(company: CompanyProfile) -> Self {
        Self {
            layout: LayoutConstants::default(),
            company,
        }
    }

    /// Lay out `invoice` as printed on `printed_on`.
    pub fn create(&self, invoice: &Invoice, printed_on: NaiveDate) -> InvoiceDocument {
        tracing::debug!(
            invoice_number = %invoice.invoice_number,
            items = invoice.items.len(),
            "Laying out invoice"
        );

        InvoiceDocument {
            page: build_invoice_page(invoice, &self.layout, &self.company, printed_on),
            title: invoice.invoice_number.clone(),
            file_name: invoice.file_name(),
        }
    }

    /// Lay out `invoice` as printed today.
    pub fn create_today(&self, invoice: &Invoice) -> InvoiceDocument {
        self.create(invoice, Local::now().date_naive())
    }
}

/// Lay out `invoice` with the default company profile, printed today.
pub fn create_invoice_doc(invoice: &Invoice) -> InvoiceDocument {
    DocumentRenderer::default().create_today(invoice)
}

/// Render `invoice` and save it as `{invoiceNumber}.pdf` under `dir`.
pub async fn download_invoice_pdf(invoice: &Invoice, dir: &Path) -> Result<PathBuf, AppError> {
    create_invoice_doc(invoice).save_to(dir).await
}

pub fn generate_preview_url(invoice: &Invoice) -> Result<String, RenderError> {
    create_invoice_doc(invoice).preview_url()
}
