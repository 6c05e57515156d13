//! PDF backend on top of `printpdf` with the built-in Helvetica faces.

use super::commands::{DrawCommand, FontWeight, PageLayout, Rgb, TextAlign};
use super::metrics::{text_width_mm, MM_PER_PT};
use super::{DocumentBackend, RenderError};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Pt, TextMatrix,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfBackend;

impl PdfBackend {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

impl DocumentBackend for PdfBackend {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, page: &PageLayout, title: &str) -> Result<Vec<u8>, RenderError> {
        let (doc, page_idx, layer_idx) =
            PdfDocument::new(title, Mm(page.width_mm), Mm(page.height_mm), "Layer 1");
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Font(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Font(e.to_string()))?,
        };

        // Page coordinates grow downwards; PDF user space grows upwards.
        let flip = |(x, y): (f32, f32)| Point::new(Mm(x), Mm(page.height_mm - y));

        for command in &page.commands {
            match command {
                DrawCommand::FillTriangle { points, color } => {
                    layer.set_fill_color(pdf_color(*color));
                    layer.add_polygon(Polygon {
                        rings: vec![points.iter().map(|p| (flip(*p), false)).collect()],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    });
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width_mm,
                } => {
                    layer.set_outline_color(pdf_color(*color));
                    layer.set_outline_thickness(width_mm / MM_PER_PT);
                    layer.add_line(Line {
                        points: vec![(flip(*from), false), (flip(*to), false)],
                        is_closed: false,
                    });
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size_pt,
                    weight,
                    color,
                    align,
                    angle_deg,
                } => {
                    let width = text_width_mm(text, *size_pt, *weight);
                    let left = match align {
                        TextAlign::Left => *x,
                        TextAlign::Center => x - width / 2.0,
                        TextAlign::Right => x - width,
                    };
                    layer.set_fill_color(pdf_color(*color));
                    draw_text(
                        &layer,
                        fonts.get(*weight),
                        text,
                        *size_pt,
                        (left, page.height_mm - y),
                        *angle_deg,
                    );
                }
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Serialization(e.to_string()))
    }
}

fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size_pt: f32,
    (x, y): (f32, f32),
    angle_deg: f32,
) {
    if angle_deg == 0.0 {
        layer.use_text(text, size_pt, Mm(x), Mm(y), font);
        return;
    }

    layer.begin_text_section();
    layer.set_font(font, size_pt);
    layer.set_text_matrix(TextMatrix::TranslateRotate(
        Pt::from(Mm(x)),
        Pt::from(Mm(y)),
        angle_deg,
    ));
    layer.write_text(text, font);
    layer.end_text_section();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PageLayout {
        PageLayout {
            width_mm: 210.0,
            height_mm: 297.0,
            commands: vec![
                DrawCommand::FillTriangle {
                    points: [(0.0, 0.0), (60.0, 0.0), (0.0, 60.0)],
                    color: Rgb(255, 140, 0),
                },
                DrawCommand::Text {
                    text: "UNPAID".to_string(),
                    x: 15.0,
                    y: 28.0,
                    size_pt: 11.0,
                    weight: FontWeight::Bold,
                    color: Rgb::WHITE,
                    align: TextAlign::Left,
                    angle_deg: -45.0,
                },
                DrawCommand::Text {
                    text: "EUR 184.50".to_string(),
                    x: 190.0,
                    y: 150.0,
                    size_pt: 10.0,
                    weight: FontWeight::Normal,
                    color: Rgb::BLACK,
                    align: TextAlign::Right,
                    angle_deg: 0.0,
                },
                DrawCommand::Line {
                    from: (20.0, 92.0),
                    to: (190.0, 92.0),
                    color: Rgb(220, 220, 220),
                    width_mm: 0.5,
                },
            ],
        }
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = PdfBackend::new().render(&sample_page(), "INV-1001").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn empty_page_still_renders() {
        let page = PageLayout {
            width_mm: 210.0,
            height_mm: 297.0,
            commands: vec![],
        };
        let bytes = PdfBackend::new().render(&page, "blank").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn reports_pdf_content_type() {
        assert_eq!(PdfBackend.content_type(), "application/pdf");
    }
}
