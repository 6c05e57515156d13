use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Components scaled to `0.0..=1.0`.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Horizontal anchoring of text relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One absolute-position drawing instruction.
///
/// Coordinates are millimetres from the top-left page corner with y growing
/// downwards. Text `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillTriangle {
        points: [(f32, f32); 3],
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
        width_mm: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size_pt: f32,
        weight: FontWeight,
        color: Rgb,
        align: TextAlign,
        /// Counter-clockwise rotation in degrees.
        angle_deg: f32,
    },
}

/// A single page and everything drawn on it, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub commands: Vec<DrawCommand>,
}

impl PageLayout {
    /// All text commands, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// The first text command whose content equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.texts()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }
}
