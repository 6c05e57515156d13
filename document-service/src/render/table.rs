//! Plain-theme table: bold header row, body rows, no fills and no cell borders.

use super::commands::{DrawCommand, FontWeight, Rgb, TextAlign};
use super::metrics::{text_width_mm, MM_PER_PT};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub width_mm: f32,
    pub align: TextAlign,
}

#[derive(Debug, Clone)]
pub struct TableStyle {
    pub padding_mm: f32,
    pub header_size_pt: f32,
    pub body_size_pt: f32,
    pub color: Rgb,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            padding_mm: 3.0,
            header_size_pt: 9.0,
            body_size_pt: 10.0,
            color: Rgb::BLACK,
        }
    }
}

pub struct Table<'a> {
    pub x: f32,
    pub y: f32,
    pub columns: &'a [Column],
    pub style: TableStyle,
}

impl Table<'_> {
    pub fn line_height(&self, size_pt: f32) -> f32 {
        size_pt * LINE_HEIGHT_FACTOR * MM_PER_PT
    }

    /// Height of a row whose tallest cell has `lines` lines.
    pub fn row_height(&self, size_pt: f32, lines: usize) -> f32 {
        lines.max(1) as f32 * self.line_height(size_pt) + 2.0 * self.style.padding_mm
    }

    /// Draws header and `rows`, returning the y just below the last row.
    ///
    /// Header cells are always left-aligned; column alignment applies to body
    /// cells. Rows shorter than the column list leave trailing cells empty.
    pub fn draw(&self, rows: &[Vec<String>], out: &mut Vec<DrawCommand>) -> f32 {
        let header: Vec<String> = self.columns.iter().map(|c| c.header.to_string()).collect();

        let mut y = self.y;
        y = self.draw_row(&header, y, self.style.header_size_pt, FontWeight::Bold, true, out);
        for row in rows {
            y = self.draw_row(row, y, self.style.body_size_pt, FontWeight::Normal, false, out);
        }
        y
    }

    fn draw_row(
        &self,
        cells: &[String],
        top: f32,
        size_pt: f32,
        weight: FontWeight,
        header: bool,
        out: &mut Vec<DrawCommand>,
    ) -> f32 {
        let padding = self.style.padding_mm;
        let first_baseline = top + padding + size_pt * MM_PER_PT;
        let line_height = self.line_height(size_pt);

        let mut cell_x = self.x;
        let mut max_lines = 1;
        for (column, text) in self.columns.iter().zip(cells) {
            let align = if header { TextAlign::Left } else { column.align };
            let x = match align {
                TextAlign::Left => cell_x + padding,
                TextAlign::Center => cell_x + column.width_mm / 2.0,
                TextAlign::Right => cell_x + column.width_mm - padding,
            };

            let lines = wrap_text(text, column.width_mm - 2.0 * padding, size_pt, weight);
            max_lines = max_lines.max(lines.len());
            for (i, line) in lines.into_iter().enumerate() {
                out.push(DrawCommand::Text {
                    text: line,
                    x,
                    y: first_baseline + i as f32 * line_height,
                    size_pt,
                    weight,
                    color: self.style.color,
                    align,
                    angle_deg: 0.0,
                });
            }
            cell_x += column.width_mm;
        }

        top + self.row_height(size_pt, max_lines)
    }
}

/// Greedy word wrap to `max_width_mm`. Words wider than a line are split
/// between characters. Always yields at least one line.
pub fn wrap_text(text: &str, max_width_mm: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, size_pt, weight) <= max_width_mm;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
