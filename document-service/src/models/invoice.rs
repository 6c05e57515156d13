//! Invoice model rendered by document-service.
//!
//! Totals arrive precomputed; nothing here recomputes or reconciles them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
    Overdue,
}

/// Line item on an invoice, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Invoice as issued upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[validate(length(min = 1, message = "invoiceNumber must not be empty"))]
    pub invoice_number: String,
    #[serde(default)]
    pub customer_name: String,
    pub date_issued: String,
    pub due_date: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Percentage, e.g. `23` for 23% VAT.
    pub tax_rate: Decimal,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub balance_due: Decimal,
    pub status: PaymentStatus,
}

impl Invoice {
    /// Fully settled invoices get the PAID banner regardless of their status field.
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid || self.balance_due.is_zero()
    }

    /// Name shown in the address block.
    pub fn display_customer(&self) -> &str {
        if self.customer_name.is_empty() {
            "Cash Sale"
        } else {
            &self.customer_name
        }
    }

    /// Invoice number with characters unsafe in file names removed.
    pub fn file_stem(&self) -> String {
        sanitize_filename::sanitize(&self.invoice_number)
    }

    /// Download name, `{invoiceNumber}.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.file_stem())
    }
}
