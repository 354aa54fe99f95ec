//! Physics tuning
//!
//! Handed to the guy, the stars' owner and the pointer controller when they are
//! built. Nothing reads these values from a global, so two sessions with
//! different tuning can run side by side.

use serde::{Deserialize, Serialize};

/// Physics constants for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration applied to the guy each tick
    pub gravity: f32,
    /// Horizontal speed lost per tick of floor contact
    pub friction: f32,
    /// Inset from the screen edges the guy can't cross. The border, speech
    /// bubble and HUD are outlined at this width so the walls match the drawing.
    pub stroke_half: f32,
    /// Fraction of velocity kept after a bounce
    pub elasticity: f32,
    /// Collision radius of the guy
    pub guy_radius: i32,
    /// Launch speed clamp (pixels per tick)
    pub min_launch_speed: f32,
    pub max_launch_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 3.0,
            friction: 5.0,
            stroke_half: 4.0,
            elasticity: 0.75,
            guy_radius: 32,
            min_launch_speed: 48.0,
            max_launch_speed: 72.0,
        }
    }
}

impl Tuning {
    /// Distance from a wall to the guy's center when he touches it
    #[inline]
    pub fn wall_inset(&self) -> f32 {
        self.guy_radius as f32 + self.stroke_half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wall_inset() {
        let tuning = Tuning::default();
        assert_eq!(tuning.wall_inset(), 36.0);
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let tuning = Tuning {
            gravity: 1.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
