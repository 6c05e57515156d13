//! Prompt builders and the static texts used when generation is unavailable.

use rust_decimal::{Decimal, RoundingStrategy};

/// Business the drafted texts speak for.
pub const BUSINESS_NAME: &str = "Clonmel Glass & Mirrors";

pub const INVOICE_NOTES_NOT_CONFIGURED: &str = "Thank you for choosing Clonmel Glass & Mirrors. \
Payment is due within 30 days of invoice date. All products come with our quality guarantee. \
For any queries, please contact us.";

pub const INVOICE_NOTES_FAILED: &str = "Thank you for your business! Payment is kindly requested \
within 30 days of invoice date. All our products come with a quality guarantee. For any queries, \
please don't hesitate to contact us.";

pub const NO_INSIGHTS: &str = "No insights available.";

/// Payment timing relative to the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentTiming {
    Overdue(u64),
    DueToday,
    Upcoming(u64),
}

impl PaymentTiming {
    /// Negative values are days past due, positive values days until due.
    pub fn from_days(days_difference: i64) -> Self {
        match days_difference {
            d if d < 0 => PaymentTiming::Overdue(d.unsigned_abs()),
            0 => PaymentTiming::DueToday,
            d => PaymentTiming::Upcoming(d.unsigned_abs()),
        }
    }

    /// Status sentence fragment, completes "The payment ...".
    pub fn context(&self) -> String {
        match self {
            PaymentTiming::Overdue(days) => {
                format!("is OVERDUE by {} days. Be firm but professional.", days)
            }
            PaymentTiming::DueToday => {
                "is DUE TODAY. Be polite and remind them of the deadline.".to_string()
            }
            PaymentTiming::Upcoming(days) => format!(
                "is UPCOMING in {} days. This is a proactive friendly reminder.",
                days
            ),
        }
    }
}

/// Two decimals, ties rounded away from zero: `10.125` -> `€10.13`.
pub fn format_euro(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("€{:.2}", rounded)
}

pub fn invoice_notes_prompt(customer_name: &str, items_description: &str) -> String {
    format!(
        "You are writing professional invoice notes for {business}, a premium glass and mirror \
installation company.

Customer: {customer_name}
Items ordered: {items_description}

Create comprehensive, professional invoice notes that include:
1. A warm, personalized thank you message acknowledging their specific order
2. Payment terms (e.g., \"Payment is kindly requested within 30 days of invoice date\")
3. A brief mention of quality assurance or warranty (e.g., \"All products come with our quality guarantee\")
4. Banking/payment instructions (e.g., \"Bank transfer details are provided below\" or \"Multiple payment methods accepted\")
5. A professional closing with contact information offer

Tone: Professional, warm, and customer-focused
Style: Well-structured with clear sections
Length: 4-6 sentences, well-formatted
Format: Use proper punctuation and paragraph breaks where appropriate.

Make it feel premium and trustworthy while being friendly and approachable.",
        business = BUSINESS_NAME,
    )
}

pub fn reminder_prompt(
    customer_name: &str,
    invoice_num: &str,
    balance: Decimal,
    timing: PaymentTiming,
) -> String {
    format!(
        "Draft a payment reminder email for {business}.
Customer: {customer_name}.
Invoice: {invoice_num}.
Balance Due: {balance}.
Status: The payment {context}
Include a request for settlement. Max 3 sentences.",
        business = BUSINESS_NAME,
        balance = format_euro(balance),
        context = timing.context(),
    )
}

pub fn reminder_not_configured(invoice_num: &str) -> String {
    format!(
        "This is a reminder that a balance remains on Invoice {}. Please settle this at your earliest convenience.",
        invoice_num
    )
}

pub fn reminder_failed(invoice_num: &str, balance: Decimal) -> String {
    format!(
        "Reminder for Invoice {}: Outstanding balance of {} needs attention.",
        invoice_num,
        format_euro(balance)
    )
}

pub fn product_description_prompt(product_name: &str) -> String {
    format!(
        "Write a short, attractive product description (max 20 words) for a glass/mirror product named \"{}\".",
        product_name
    )
}

pub fn trends_prompt(summary_text: &str) -> String {
    format!(
        "Analyze this invoice summary data and give 3 bullet points on sales performance and \
outstanding payments. Keep it brief. Data: {}",
        summary_text
    )
}
