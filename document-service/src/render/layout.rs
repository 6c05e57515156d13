//! Fixed A4 invoice template.
//!
//! Every position is an absolute offset derived from [`LayoutConstants`].
//! Only item rows grow, when a cell wraps; the list is assumed to fit one page.

use super::commands::{DrawCommand, FontWeight, PageLayout, Rgb, TextAlign};
use super::format;
use super::table::{Column, Table, TableStyle};
use crate::models::Invoice;
use chrono::NaiveDate;
use serde::Deserialize;

const PAID_GREEN: Rgb = Rgb(34, 197, 94);
const UNPAID_ORANGE: Rgb = Rgb(255, 140, 0);
const TITLE_GRAY: Rgb = Rgb(80, 80, 80);
const BRAND_CYAN: Rgb = Rgb(0, 174, 239);
const TAGLINE_GRAY: Rgb = Rgb(100, 100, 100);
const RULE_GRAY: Rgb = Rgb(220, 220, 220);
const FOOTER_GRAY: Rgb = Rgb(180, 180, 180);

/// Margins and section offsets, in millimetres.
#[derive(Debug, Clone)]
pub struct LayoutConstants {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top: f32,
    pub banner_size: f32,
    pub banner_text_at: (f32, f32),
    pub banner_angle_deg: f32,
    /// Column offset of "Deliver To" from the left margin.
    pub deliver_to_offset: f32,
    pub info_columns: usize,
    /// Distance of the totals labels from the right margin.
    pub totals_label_offset: f32,
    pub footer_gap: f32,
    pub bottom_strip_offset: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            left_margin: 20.0,
            right_margin: 20.0,
            top: 25.0,
            banner_size: 60.0,
            banner_text_at: (15.0, 28.0),
            banner_angle_deg: -45.0,
            deliver_to_offset: 60.0,
            info_columns: 5,
            totals_label_offset: 60.0,
            footer_gap: 15.0,
            bottom_strip_offset: 10.0,
        }
    }
}

impl LayoutConstants {
    fn right_edge(&self) -> f32 {
        self.page_width - self.right_margin
    }

    fn content_width(&self) -> f32 {
        self.page_width - self.left_margin - self.right_margin
    }
}

/// Issuer details printed on every invoice.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub display_name: String,
    pub tagline: String,
    /// Detail lines containing this text are printed bold.
    pub legal_name: String,
    pub detail_lines: Vec<String>,
    pub account_manager: String,
    pub vat_number: String,
    pub bank_name: String,
    pub iban: String,
    pub deposit_policy: String,
    pub attribution: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            display_name: "CLONMEL GLASS".to_string(),
            tagline: "Professional Solutions".to_string(),
            legal_name: "Clonmel Glass".to_string(),
            detail_lines: vec![
                "Clonmel Glass & Mirrors Ltd".to_string(),
                "24 Mary Street".to_string(),
                "Clonmel".to_string(),
                "Limerick / Co. Tipperary".to_string(),
                String::new(),
                "Tel: (052) 612 1111".to_string(),
                "Web: www.mirrorzone.ie".to_string(),
            ],
            account_manager: "Admin".to_string(),
            vat_number: "IE8252470Q".to_string(),
            bank_name: "PTSB BANK".to_string(),
            iban: "IE98IPBS99071010105209".to_string(),
            deposit_policy: "Deposit of 50% prior to installation.".to_string(),
            attribution: "Created by Clonmel Glass Invoice Hub".to_string(),
        }
    }
}

/// Accumulates draw commands with a current text style.
struct Pen {
    commands: Vec<DrawCommand>,
    size_pt: f32,
    weight: FontWeight,
    color: Rgb,
}

impl Pen {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            size_pt: 10.0,
            weight: FontWeight::Normal,
            color: Rgb::BLACK,
        }
    }

    fn style(&mut self, weight: FontWeight, size_pt: f32, color: Rgb) {
        self.weight = weight;
        self.size_pt = size_pt;
        self.color = color;
    }

    fn text_angled(&mut self, text: &str, x: f32, y: f32, align: TextAlign, angle_deg: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size_pt: self.size_pt,
            weight: self.weight,
            color: self.color,
            align,
            angle_deg,
        });
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.text_angled(text, x, y, TextAlign::Left, 0.0);
    }

    fn text_right(&mut self, text: &str, x: f32, y: f32) {
        self.text_angled(text, x, y, TextAlign::Right, 0.0);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, width_mm: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width_mm,
        });
    }
}

fn item_columns() -> [Column; 5] {
    [
        Column {
            header: "Description",
            width_mm: 80.0,
            align: TextAlign::Left,
        },
        Column {
            header: "Quantity",
            width_mm: 25.0,
            align: TextAlign::Center,
        },
        Column {
            header: "Price",
            width_mm: 25.0,
            align: TextAlign::Right,
        },
        Column {
            header: "VAT Rate",
            width_mm: 25.0,
            align: TextAlign::Center,
        },
        Column {
            header: "Total",
            width_mm: 25.0,
            align: TextAlign::Right,
        },
    ]
}

/// Lay out `invoice` on a single page. `printed_on` feeds the bottom strip.
pub fn build_invoice_page(
    invoice: &Invoice,
    layout: &LayoutConstants,
    company: &CompanyProfile,
    printed_on: NaiveDate,
) -> PageLayout {
    let mut pen = Pen::new();
    let left = layout.left_margin;
    let right = layout.right_edge();
    let mut y = layout.top;

    // Banner
    let (banner_text, banner_color) = if invoice.is_paid() {
        ("PAID", PAID_GREEN)
    } else {
        ("UNPAID", UNPAID_ORANGE)
    };
    pen.commands.push(DrawCommand::FillTriangle {
        points: [(0.0, 0.0), (layout.banner_size, 0.0), (0.0, layout.banner_size)],
        color: banner_color,
    });
    pen.style(FontWeight::Bold, 11.0, Rgb::WHITE);
    let (bx, by) = layout.banner_text_at;
    pen.text_angled(banner_text, bx, by, TextAlign::Left, layout.banner_angle_deg);

    // Header
    pen.style(FontWeight::Normal, 28.0, TITLE_GRAY);
    pen.text("Invoice", left, y);
    pen.style(FontWeight::Bold, 16.0, Rgb::BLACK);
    pen.text(&invoice.invoice_number, left, y + 10.0);

    pen.style(FontWeight::Bold, 18.0, BRAND_CYAN);
    pen.text_right(&company.display_name, right, y);
    pen.style(FontWeight::Normal, 9.0, TAGLINE_GRAY);
    pen.text_right(&company.tagline, right, y + 6.0);

    y += 25.0;

    // Addresses
    let customer = invoice.display_customer();
    for (label, x) in [
        ("Invoice To:", left),
        ("Deliver To:", left + layout.deliver_to_offset),
    ] {
        pen.style(FontWeight::Bold, 9.0, Rgb::BLACK);
        pen.text(label, x, y);
        pen.style(FontWeight::Normal, 10.0, Rgb::BLACK);
        pen.text(customer, x, y + 5.0);
    }

    let mut detail_y = y;
    for line in &company.detail_lines {
        let weight = if line.contains(&company.legal_name) {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        pen.style(weight, 9.0, Rgb::BLACK);
        if !line.is_empty() {
            pen.text_right(line, right, detail_y);
        }
        detail_y += 4.0;
    }

    y += 30.0;

    // Info row
    let info = [
        ("Invoice Date", invoice.date_issued.as_str()),
        ("Ref. No.", invoice.invoice_number.as_str()),
        ("Account Manager", company.account_manager.as_str()),
        ("VAT No.", company.vat_number.as_str()),
        ("Payment Due", invoice.due_date.as_str()),
    ];
    let col_width = layout.content_width() / layout.info_columns as f32;
    for (i, (label, value)) in info.iter().enumerate() {
        let x = left + i as f32 * col_width;
        pen.style(FontWeight::Bold, 8.0, Rgb::BLACK);
        pen.text(label, x, y);
        pen.style(FontWeight::Normal, 8.0, Rgb::BLACK);
        pen.text(value, x, y + 4.0);
    }

    y += 12.0;

    pen.line((left, y), (right, y), RULE_GRAY, 0.5);

    y += 8.0;

    // Items
    let rows: Vec<Vec<String>> = invoice
        .items
        .iter()
        .map(|item| {
            vec![
                item.description.clone(),
                format::quantity(item.quantity),
                format::money(item.unit_price),
                format::percent(invoice.tax_rate),
                format::money(item.total),
            ]
        })
        .collect();

    let columns = item_columns();
    let table = Table {
        x: left,
        y,
        columns: &columns,
        style: TableStyle::default(),
    };
    let final_y = table.draw(&rows, &mut pen.commands);
    pen.line((left, final_y), (right, final_y), RULE_GRAY, 0.3);

    // Payment terms
    let footer_y = final_y + layout.footer_gap;
    let mut terms_y = footer_y;
    pen.style(FontWeight::Bold, 10.0, Rgb::BLACK);
    pen.text("Payment Terms:", left, terms_y);

    pen.style(FontWeight::Normal, 9.0, Rgb::BLACK);
    terms_y += 5.0;
    pen.text(&format!("Bank Transfer to: {}", company.bank_name), left, terms_y);
    terms_y += 4.0;
    pen.text(&format!("IBAN: {}", company.iban), left, terms_y);
    terms_y += 4.0;
    pen.text(&company.deposit_policy, left, terms_y);

    // Totals
    let totals_x = right - layout.totals_label_offset;
    let mut total_y = footer_y;
    pen.style(FontWeight::Normal, 10.0, Rgb::BLACK);
    for (label, amount) in [
        ("Total Net", invoice.subtotal),
        ("Total VAT", invoice.tax_amount),
        ("Total Gross", invoice.total),
    ] {
        pen.text(label, totals_x, total_y);
        pen.text_right(&format::eur(amount), right, total_y);
        total_y += 6.0;
    }

    total_y += 2.0;
    pen.style(FontWeight::Bold, 11.0, Rgb::BLACK);
    pen.text("Total Payable", totals_x, total_y);
    pen.text_right(&format::eur(invoice.balance_due), right, total_y);

    // Bottom strip
    let strip_y = layout.page_height - layout.bottom_strip_offset;
    pen.style(FontWeight::Normal, 8.0, FOOTER_GRAY);
    pen.text(
        &format!(
            "Printed on: {} | Page 1 of 1",
            printed_on.format("%d/%m/%Y")
        ),
        left,
        strip_y,
    );
    pen.text_right(&company.attribution, right, strip_y);

    PageLayout {
        width_mm: layout.page_width,
        height_mm: layout.page_height,
        commands: pen.commands,
    }
}
