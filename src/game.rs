//! Game session
//!
//! Owns the simulation state, the pointer controller and the queue the host
//! pushes pointer events into. The host calls `update()` then `render()` once
//! per tick; this type never drives its own timing.

use glam::Vec2;

use crate::input::{InputQueue, PointerController, PointerEvent};
use crate::renderer::{self, DrawCommand, TextMetrics};
use crate::sim::{GameState, Guy, Star, TickReport, tick};
use crate::tuning::Tuning;

pub struct StarNom {
    state: GameState,
    pointer: PointerController,
    input: InputQueue,
    running: bool,
}

impl StarNom {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            pointer: PointerController::new(&tuning),
            input: InputQueue::default(),
            running: false,
        }
    }

    /// Reset the round and begin accepting ticks
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
        log::info!("Star Nom started (seed {})", self.state.seed);
    }

    /// Stop accepting ticks. State is left as-is for a final render.
    pub fn stop(&mut self) {
        self.running = false;
        log::info!("Star Nom stopped with score {}", self.state.score);
    }

    /// Start a new round. Any gesture in progress and pending input are dropped.
    pub fn reset(&mut self) {
        self.state.reset();
        self.pointer.cancel();
        let dropped = self.input.drain().len();
        if dropped > 0 {
            log::debug!("Dropped {dropped} pending pointer events on reset");
        }
        log::info!("New round");
    }

    /// Queue a pointer event for the next tick
    pub fn push_event(&mut self, event: PointerEvent) {
        self.input.push(event);
    }

    /// Run one fixed tick
    pub fn update(&mut self) -> TickReport {
        if !self.running {
            log::trace!("Tick ignored: session not started");
            return TickReport::default();
        }

        let events = self.input.drain();
        let report = tick(&mut self.state, &mut self.pointer, &events);
        if report.stars_eaten > 0 {
            log::debug!(
                "Tick {}: ate {} star(s), score {}",
                self.state.time_ticks,
                report.stars_eaten,
                self.state.score
            );
        }
        report
    }

    /// Draw commands for the current state
    pub fn render(&self, metrics: &dyn TextMetrics) -> Vec<DrawCommand> {
        renderer::frame(&self.state, metrics)
    }

    /// Change the play area; takes effect from the next tick
    pub fn resize(&mut self, width: i32, height: i32) {
        self.state.resize(width, height);
    }

    pub fn guy(&self) -> &Guy {
        &self.state.guy
    }

    pub fn stars(&self) -> &[Star] {
        &self.state.stars
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pointer(&self) -> &PointerController {
        &self.pointer
    }

    /// Where a host should aim a press to grab the guy
    pub fn guy_position(&self) -> Vec2 {
        self.state.guy.motion.pos
    }

    /// Serialize the full simulation state
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}
