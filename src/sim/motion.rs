//! Motion and the shared entity contract
//!
//! Both the guy and the stars move the same way: acceleration feeds velocity,
//! velocity feeds position, once per tick. They share that through a `Motion`
//! value they own rather than a common base type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{DrawCommand, TextMetrics};

/// 2D float pair used for positions, velocities and accelerations
pub type Vector2 = Vec2;

/// The two vector operations the simulation leans on
pub trait VectorExt {
    /// Zero both components in place
    fn reset(&mut self);
    /// Squared distance to `other` (no square root on the hot collision path)
    fn squared_distance(&self, other: Vector2) -> f32;
}

impl VectorExt for Vector2 {
    #[inline]
    fn reset(&mut self) {
        *self = Vec2::ZERO;
    }

    #[inline]
    fn squared_distance(&self, other: Vector2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// Position, velocity and acceleration of one moving entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vector2,
    pub vel: Vector2,
    pub acc: Vector2,
}

impl Motion {
    pub fn new(pos: Vector2, vel: Vector2, acc: Vector2) -> Self {
        Self { pos, vel, acc }
    }

    /// Semi-implicit Euler step: velocity first, then position
    #[inline]
    pub fn integrate(&mut self) {
        self.vel += self.acc;
        self.pos += self.vel;
    }

    #[inline]
    pub fn squared_distance(&self, other: Vector2) -> f32 {
        self.pos.squared_distance(other)
    }
}

/// Something that moves, collides and draws itself
///
/// Implemented by exactly two types: [`super::Guy`] and [`super::Star`].
pub trait Entity {
    fn motion(&self) -> &Motion;
    fn motion_mut(&mut self) -> &mut Motion;

    /// Collision radius in pixels
    fn size(&self) -> i32;

    /// Append this entity's draw commands. Never mutates the entity.
    fn draw(&self, metrics: &dyn TextMetrics, out: &mut Vec<DrawCommand>);

    fn integrate(&mut self) {
        self.motion_mut().integrate();
    }

    fn squared_distance_to(&self, other: &dyn Entity) -> f32 {
        self.motion().squared_distance(other.motion().pos)
    }
}
