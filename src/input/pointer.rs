//! Drag-and-release throwing
//!
//! A gesture starts when the pointer is dragged while over the guy. Each tick
//! of the gesture bumps a counter; on release (or when the pointer leaves the
//! play area) the guy gets the average drag velocity, clamped into a speed band.

use glam::Vec2;

use super::queue::PointerEvent;
use crate::sim::{Entity, Guy, VectorExt};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct PointerController {
    /// Where the current drag started, if one is in progress
    origin: Option<Vec2>,
    /// Ticks since the press
    elapsed_ticks: u32,
    min_speed: f32,
    max_speed: f32,
}

impl PointerController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            origin: None,
            elapsed_ticks: 0,
            min_speed: tuning.min_launch_speed,
            max_speed: tuning.max_launch_speed,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Apply one host event. Returns the launch velocity if the guy was thrown.
    pub fn handle(&mut self, event: PointerEvent, guy: &mut Guy) -> Option<Vec2> {
        match event {
            PointerEvent::Press(_) => {
                self.press();
                None
            }
            PointerEvent::Drag(point) => {
                self.drag(point, guy);
                None
            }
            PointerEvent::Release(point) | PointerEvent::Exit(point) => self.release(point, guy),
        }
    }

    /// Restart the duration count for the gesture that may follow
    pub fn press(&mut self) {
        self.elapsed_ticks = 0;
    }

    /// Begin a gesture if none is active and `point` is on the guy
    pub fn drag(&mut self, point: Vec2, guy: &Guy) {
        if self.origin.is_some() {
            return;
        }
        let radius = guy.size() as f32;
        if point.squared_distance(guy.motion().pos) < radius * radius {
            log::trace!("Drag started at ({:.0}, {:.0})", point.x, point.y);
            self.origin = Some(point);
        }
    }

    /// Finish the gesture and throw the guy. Ignored when nothing is being dragged.
    pub fn release(&mut self, point: Vec2, guy: &mut Guy) -> Option<Vec2> {
        let origin = self.origin.take()?;
        let vel = launch_velocity(
            point - origin,
            self.elapsed_ticks,
            self.min_speed,
            self.max_speed,
        );
        guy.motion_mut().vel = vel;
        log::debug!(
            "Launched after {} ticks with velocity ({:.1}, {:.1})",
            self.elapsed_ticks,
            vel.x,
            vel.y
        );
        Some(vel)
    }

    /// Advance the gesture clock; called once per simulation tick
    pub fn tick(&mut self) {
        if self.origin.is_some() {
            self.elapsed_ticks += 1;
        }
    }

    /// Drop any gesture in progress without throwing
    pub fn cancel(&mut self) {
        self.origin = None;
        self.elapsed_ticks = 0;
    }
}

/// Average per-tick drag velocity, clamped into `[min_speed, max_speed]`
///
/// A gesture that took no ticks produces no velocity.
pub fn launch_velocity(delta: Vec2, elapsed_ticks: u32, min_speed: f32, max_speed: f32) -> Vec2 {
    if elapsed_ticks == 0 {
        return Vec2::ZERO;
    }
    let raw = delta / elapsed_ticks as f32;
    normalize_speed(raw, min_speed, max_speed)
}

/// Scale `vel` so its length lands inside `[min_speed, max_speed]`, keeping direction
pub fn normalize_speed(vel: Vec2, min_speed: f32, max_speed: f32) -> Vec2 {
    // Manhattan check is only a "has any motion" test
    if vel.x.abs() + vel.y.abs() <= 0.0 {
        return vel;
    }
    let speed = (vel.x * vel.x + vel.y * vel.y).sqrt();
    if speed > max_speed {
        vel * (max_speed / speed)
    } else if speed < min_speed {
        vel * (min_speed / speed)
    } else {
        vel
    }
}
