//! Stars: pooled ballistic projectiles
//!
//! A star waits out a random delay parked off the left edge, arcs across the
//! screen, and recycles itself in place once it leaves. Slots are never
//! allocated or freed after the pool is built.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion::{Entity, Motion};
use crate::consts::*;
use crate::renderer::{DrawCommand, TextMetrics, shapes};

/// Star fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarColor {
    Pink,
    DarkCyan,
    LightOrange,
}

impl StarColor {
    pub const PALETTE: [StarColor; 3] = [StarColor::Pink, StarColor::DarkCyan, StarColor::LightOrange];
}

/// Where a star is in its launch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarPhase {
    /// Frozen off screen, counting down to launch
    Delayed,
    /// Integrating every tick
    Flying,
}

/// A star slot in the pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub motion: Motion,
    size: i32,
    delay: u32,
    color: StarColor,
}

impl Star {
    pub fn new<R: Rng + ?Sized>(screen_width: i32, screen_height: i32, rng: &mut R) -> Self {
        let mut star = Self {
            motion: Motion::default(),
            size: STAR_MAX_SIZE,
            delay: 0,
            color: StarColor::Pink,
        };
        star.reset(screen_width, screen_height, rng);
        star
    }

    /// Re-roll delay, trajectory, color and size
    pub fn reset<R: Rng + ?Sized>(&mut self, _screen_width: i32, screen_height: i32, rng: &mut R) {
        self.delay = rng.random_range(0..STAR_DELAY_MAX);
        self.motion.pos = Vec2::new(
            STAR_START_X,
            screen_height as f32 - 175.0 - rng.random_range(0..85) as f32,
        );
        self.motion.vel = Vec2::new(
            7.5 + rng.random_range(0..5) as f32,
            -7.0 - rng.random_range(0..3) as f32,
        );
        self.motion.acc = Vec2::new(0.0, STAR_GRAVITY);
        self.color = StarColor::PALETTE[rng.random_range(0..StarColor::PALETTE.len())];
        self.size = STAR_MAX_SIZE - STAR_SIZE_VARIATION + rng.random_range(0..STAR_SIZE_VARIATION);
    }

    /// Advance one tick. A star that has left the screen resets instead of moving.
    pub fn update<R: Rng + ?Sized>(&mut self, screen_width: i32, screen_height: i32, rng: &mut R) {
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }
        if self.is_off_screen(screen_width, screen_height) {
            self.reset(screen_width, screen_height, rng);
        } else {
            self.integrate();
        }
    }

    pub fn is_off_screen(&self, screen_width: i32, screen_height: i32) -> bool {
        self.motion.pos.x + (self.size + STAR_SCREEN_MARGIN) as f32 > screen_width as f32
            || self.motion.pos.y > screen_height as f32
    }

    pub fn phase(&self) -> StarPhase {
        if self.delay > 0 {
            StarPhase::Delayed
        } else {
            StarPhase::Flying
        }
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn color(&self) -> StarColor {
        self.color
    }

    /// Points awarded for eating this star
    pub fn points(&self) -> u64 {
        (self.size * 10 / STAR_MAX_SIZE) as u64
    }
}

impl Entity for Star {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn size(&self) -> i32 {
        self.size
    }

    fn draw(&self, _metrics: &dyn TextMetrics, out: &mut Vec<DrawCommand>) {
        shapes::star(self.motion.pos, self.size, self.color, out);
    }
}
