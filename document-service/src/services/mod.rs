pub mod document;
pub mod metrics;

pub use document::{
    create_invoice_doc, download_invoice_pdf, generate_preview_url, DocumentRenderer,
    InvoiceDocument,
};
