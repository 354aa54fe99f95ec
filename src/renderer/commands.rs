//! Draw commands handed to the host's render surface

use glam::Vec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// One primitive for the render surface. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    FillRoundRect { rect: Rect, corner: f32, color: Color },
    StrokeRoundRect { rect: Rect, corner: f32, color: Color, width: f32 },
    FillOval { rect: Rect, color: Color },
    StrokeOval { rect: Rect, color: Color, width: f32 },
    StrokeArc { rect: Rect, start: f32, sweep: f32, color: Color, width: f32 },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokePolygon { points: Vec<Vec2>, color: Color, width: f32 },
    /// Text with its baseline-left corner at `pos`
    Text { text: String, pos: Vec2, color: Color },
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::rgb(124, 85, 85);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GUY_BODY: Color = Color::rgb(0, 124, 124);
    pub const GUY_HAIR: Color = Color::rgb(255, 200, 0);
    pub const MOUTH: Color = Color::rgb(86, 0, 0);
    pub const STAR_PINK: Color = Color::rgb(255, 175, 175);
    pub const STAR_CYAN: Color = Color::rgb(0, 178, 178);
    pub const STAR_ORANGE: Color = Color::rgb(255, 255, 0);
}
