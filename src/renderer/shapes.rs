//! Shape generation for the guy, his speech bubble, stars and the HUD
//!
//! Pixel sizes use integer division where a whole-pixel size is wanted, so the
//! face features snap the same way at every radius.

use glam::Vec2;

use super::commands::{Color, DrawCommand, Rect, colors};
use super::text::TextMetrics;
use crate::sim::{Face, Guy, StarColor};

/// Corner arc of the guy's rounded body
const BODY_CORNER: f32 = 25.0;
const PUPIL_SIZE: i32 = 6;
const MOUTH_SIZE: i32 = 10;
/// Speech bubble tail: half-width and height
const TAIL_HALF_WIDTH: f32 = 5.0;
const TAIL_HEIGHT: f32 = 16.0;
/// 36 degrees, the angle between neighbouring star points
const STAR_POINT_STEP: f32 = 0.628_318_5;

pub fn star_color(color: StarColor) -> Color {
    match color {
        StarColor::Pink => colors::STAR_PINK,
        StarColor::DarkCyan => colors::STAR_CYAN,
        StarColor::LightOrange => colors::STAR_ORANGE,
    }
}

/// Sky fill and the screen border, `stroke` wide
pub fn background(width: i32, height: i32, stroke: f32, out: &mut Vec<DrawCommand>) {
    let (w, h) = (width as f32, height as f32);
    out.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, w, h),
        color: colors::SKY,
    });
    // Top edge sits above the screen: the ceiling is open
    out.push(DrawCommand::StrokeRect {
        rect: Rect::new(0.0, -10.0, w - 1.0, h + 10.0 - 1.0),
        color: colors::BLACK,
        width: stroke,
    });
}

/// Rounded body with the orange top half
pub fn guy_body(guy: &Guy, out: &mut Vec<DrawCommand>) {
    let r = guy.radius();
    let pos = guy.motion.pos;
    let (x, y) = ((pos.x - r as f32).trunc(), (pos.y - r as f32).trunc());
    let d = (r * 2) as f32;

    out.push(DrawCommand::FillRoundRect {
        rect: Rect::new(x, y, d, d),
        corner: BODY_CORNER,
        color: colors::GUY_BODY,
    });
    out.push(DrawCommand::FillRoundRect {
        rect: Rect::new(x, y, d, r as f32),
        corner: BODY_CORNER,
        color: colors::GUY_HAIR,
    });
    out.push(DrawCommand::StrokeRoundRect {
        rect: Rect::new(x, y, d, d),
        corner: BODY_CORNER,
        color: colors::BLACK,
        width: outline_width(guy),
    });
}

/// Eyes and mouth for the guy's current face
pub fn guy_face(guy: &Guy, out: &mut Vec<DrawCommand>) {
    let r = guy.radius();
    let pos = guy.motion.pos;
    let width = outline_width(guy);
    let mouth_y = pos.y + (r / 2) as f32;

    match guy.face() {
        Face::Eating => {
            for eye in eye_rects(pos, r, r / 16) {
                out.push(DrawCommand::FillOval { rect: eye, color: colors::WHITE });
                out.push(DrawCommand::StrokeOval { rect: eye, color: colors::BLACK, width });
            }

            // Mouth shrinks as the chewing winds down
            let grow = guy.eat_timer() as i32 * r / 32 + 3;
            let mouth = Rect::new((pos.x - (grow / 2) as f32).trunc(), mouth_y, grow as f32, grow as f32);
            out.push(DrawCommand::FillOval { rect: mouth, color: colors::MOUTH });
            out.push(DrawCommand::StrokeOval { rect: mouth, color: colors::BLACK, width });
        }
        Face::Surprised => {
            let eyes = eye_rects(pos, r, r / 3);
            for eye in eyes {
                out.push(DrawCommand::FillOval { rect: eye, color: colors::WHITE });
                out.push(DrawCommand::StrokeOval { rect: eye, color: colors::BLACK, width });
            }

            // Pupils look toward the wall that was hit
            let offset = if guy.facing_left() { -2.0 } else { 2.0 };
            for pupil in eye_rects(pos, r, PUPIL_SIZE) {
                let rect = Rect::new(pupil.x + offset, pupil.y, pupil.w, pupil.h);
                out.push(DrawCommand::FillOval { rect, color: colors::BLACK });
            }

            let mouth_x = pos.x - (MOUTH_SIZE / 2) as f32;
            let mouth = Rect::new(mouth_x, mouth_y, MOUTH_SIZE as f32, MOUTH_SIZE as f32);
            out.push(DrawCommand::FillOval { rect: mouth, color: colors::MOUTH });
            out.push(DrawCommand::FillRoundRect {
                rect: Rect::new(mouth_x, mouth_y, MOUTH_SIZE as f32, (MOUTH_SIZE / 2) as f32),
                corner: 5.0,
                color: colors::WHITE,
            });
            out.push(DrawCommand::StrokeOval { rect: mouth, color: colors::BLACK, width });
        }
        Face::Neutral => {
            for eye in eye_rects(pos, r, PUPIL_SIZE) {
                out.push(DrawCommand::StrokeArc {
                    rect: eye,
                    start: 0.0,
                    sweep: 180.0,
                    color: colors::BLACK,
                    width,
                });
            }
            let half = (MOUTH_SIZE / 2) as f32;
            out.push(DrawCommand::Line {
                from: Vec2::new(pos.x - half, mouth_y + half),
                to: Vec2::new(pos.x + half, mouth_y + half),
                color: colors::BLACK,
                width,
            });
        }
    }
}

/// Bubble geometry for the guy's current speech
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechLayout {
    pub bubble: Rect,
    pub corner: f32,
    /// Outline of the tail pointing down at the guy
    pub tail: [Vec2; 3],
    /// Slightly larger fill that hides the bubble outline where the tail joins
    pub tail_fill: [Vec2; 3],
    /// Each text line with its baseline-left position
    pub lines: Vec<(String, Vec2)>,
}

impl SpeechLayout {
    pub fn new(guy: &Guy, metrics: &dyn TextMetrics) -> Self {
        let pos = guy.motion.pos;
        let radius = guy.radius() as f32;
        let line_height = metrics.line_height();

        let lines: Vec<&str> = guy.speech().split('\n').filter(|l| !l.is_empty()).collect();
        let text_height = (line_height * (lines.len() as f32 + 0.5)).trunc();
        let text_width = lines
            .iter()
            .map(|l| metrics.text_width(l))
            .fold(0.0_f32, f32::max);

        let buffer = 10.0 + guy.tuning().stroke_half;
        let corner_x = (pos.x - (text_width + buffer) / 2.0).trunc();
        let corner_y = (pos.y - (text_height + buffer) / 2.0).trunc() - radius - text_height - TAIL_HEIGHT;
        let bubble = Rect::new(corner_x, corner_y, text_width + buffer, text_height + buffer);

        let tail_top = bubble.bottom();
        let tail_left = pos.x.trunc() - TAIL_HALF_WIDTH;
        let tail = [
            Vec2::new(tail_left, tail_top),
            Vec2::new(tail_left + TAIL_HALF_WIDTH, tail_top + TAIL_HEIGHT),
            Vec2::new(tail_left + 2.0 * TAIL_HALF_WIDTH, tail_top),
        ];
        let tail_fill = [
            tail[0] + Vec2::new(-1.0, -5.0),
            tail[1],
            tail[2] + Vec2::new(1.0, -5.0),
        ];

        let inner = buffer / 2.0;
        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let center = ((text_width - metrics.text_width(line)) / 2.0).trunc();
                let baseline = Vec2::new(
                    corner_x + inner + center,
                    corner_y + inner + (i + 1) as f32 * line_height,
                );
                (line.to_string(), baseline)
            })
            .collect();

        Self {
            bubble,
            corner: buffer * 2.0,
            tail,
            tail_fill,
            lines,
        }
    }
}

pub fn speech_bubble(guy: &Guy, metrics: &dyn TextMetrics, out: &mut Vec<DrawCommand>) {
    let layout = SpeechLayout::new(guy, metrics);
    let stroke = guy.tuning().stroke_half;

    out.push(DrawCommand::FillRoundRect {
        rect: layout.bubble,
        corner: layout.corner,
        color: colors::WHITE,
    });
    out.push(DrawCommand::StrokeRoundRect {
        rect: layout.bubble,
        corner: layout.corner,
        color: colors::BLACK,
        width: stroke,
    });
    out.push(DrawCommand::StrokePolygon {
        points: layout.tail.to_vec(),
        color: colors::BLACK,
        width: stroke,
    });
    out.push(DrawCommand::FillPolygon {
        points: layout.tail_fill.to_vec(),
        color: colors::WHITE,
    });
    for (text, pos) in layout.lines {
        out.push(DrawCommand::Text { text, pos, color: colors::BLACK });
    }
}

/// Ten-point star outline, first point straight up
pub fn star_points(center: Vec2, radius: i32) -> Vec<Vec2> {
    (0..10)
        .map(|i| {
            let theta = std::f32::consts::PI * 1.5 + STAR_POINT_STEP * i as f32;
            // Inner points sit at half the radius
            let r = radius as f32 / (i % 2 + 1) as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * r
        })
        .collect()
}

pub fn star(center: Vec2, radius: i32, color: StarColor, out: &mut Vec<DrawCommand>) {
    let points = star_points(center, radius);
    out.push(DrawCommand::FillPolygon {
        points: points.clone(),
        color: star_color(color),
    });
    out.push(DrawCommand::StrokePolygon {
        points,
        color: colors::BLACK,
        width: (radius / 5) as f32,
    });
}

pub fn score(points: u64, stroke: f32, metrics: &dyn TextMetrics, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Text {
        text: format!("SCORE: {points}"),
        pos: Vec2::new(stroke * 2.0, metrics.line_height()),
        color: colors::BLACK,
    });
}

fn outline_width(guy: &Guy) -> f32 {
    (guy.radius() / 8) as f32
}

/// Left and right eye boxes of `size` centred half a radius up and out
fn eye_rects(pos: Vec2, radius: i32, size: i32) -> [Rect; 2] {
    let half = (radius / 2) as f32;
    let y = (pos.y - half).trunc() - (size / 2) as f32;
    let s = size as f32;
    [
        Rect::new((pos.x - half).trunc() - (size / 2) as f32, y, s, s),
        Rect::new((pos.x + half).trunc() - (size / 2) as f32, y, s, s),
    ]
}
