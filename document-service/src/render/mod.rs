//! Invoice page rendering.
//!
//! Layout is a pure function from an invoice to an ordered list of
//! [`DrawCommand`]s in page millimetres; a [`DocumentBackend`] turns that list
//! into bytes.

pub mod commands;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod table;

pub use commands::{DrawCommand, FontWeight, PageLayout, Rgb, TextAlign};
pub use layout::{build_invoice_page, CompanyProfile, LayoutConstants};
pub use pdf::PdfBackend;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Font error: {0}")]
    Font(String),

    #[error("PDF serialization failed: {0}")]
    Serialization(String),
}

/// Turns a laid-out page into a serialized document.
pub trait DocumentBackend: Send + Sync {
    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;

    fn render(&self, page: &PageLayout, title: &str) -> Result<Vec<u8>, RenderError>;
}
