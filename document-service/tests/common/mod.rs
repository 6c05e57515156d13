#![allow(dead_code)]

use document_service::models::Invoice;
use serde_json::{json, Value};

/// Unpaid single-item invoice with no customer name.
pub fn sample_invoice_json() -> Value {
    json!({
        "invoiceNumber": "INV-1001",
        "customerName": "",
        "dateIssued": "01/10/2026",
        "dueDate": "31/10/2026",
        "items": [
            {"description": "Mirror 1200x800", "quantity": 1, "unitPrice": "150.00", "total": "150.00"}
        ],
        "taxRate": 23,
        "subtotal": "150.00",
        "taxAmount": "34.50",
        "total": "184.50",
        "balanceDue": "184.50",
        "status": "UNPAID"
    })
}

pub fn sample_invoice() -> Invoice {
    serde_json::from_value(sample_invoice_json()).expect("sample invoice deserializes")
}
