use crate::Color;

/// A stroke dash pattern: alternating on/off lengths plus a starting phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineDash {
    pub pattern: Vec<f32>,
    pub phase: f32,
}

impl LineDash {
    pub fn new(pattern: impl Into<Vec<f32>>, phase: f32) -> Self {
        Self {
            pattern: pattern.into(),
            phase,
        }
    }

    /// The solid-line pattern (`[] 0 d`).
    pub fn solid() -> Self {
        Self::default()
    }

    pub fn is_solid(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// The drawing parameters applied to every vector primitive and text run.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f32,
    pub dash: LineDash,
}

impl Default for GraphicsState {
    /// Matches the initial PDF graphics state: black, 1pt, solid.
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: 1.0,
            dash: LineDash::solid(),
        }
    }
}
