//! Rendering module
//!
//! Turns simulation state into a flat list of draw commands. Nothing here
//! mutates state; the host's surface decides how to rasterize the commands.

pub mod commands;
pub mod shapes;
pub mod text;

pub use commands::{Color, DrawCommand, Rect, colors};
pub use shapes::SpeechLayout;
pub use text::{MonospaceMetrics, TextMetrics};

use crate::sim::{Entity, GameState, StarPhase};

/// Draw commands for one frame, back to front
pub fn frame(state: &GameState, metrics: &dyn TextMetrics) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(128);

    let stroke = state.tuning.stroke_half;
    shapes::background(state.screen_width, state.screen_height, stroke, &mut out);
    state.guy.draw(metrics, &mut out);
    // Delayed stars are parked off screen
    for star in state.stars.iter().filter(|s| s.phase() == StarPhase::Flying) {
        star.draw(metrics, &mut out);
    }
    shapes::score(state.score, stroke, metrics, &mut out);

    out
}
