//! Game state
//!
//! Everything a round needs lives here: the guy, the star pool, score, the intro
//! countdown and the seeded RNG every random draw goes through.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::guy::Guy;
use super::star::Star;
use crate::consts::*;
use crate::tuning::Tuning;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared random source, passed down by `&mut`
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub screen_width: i32,
    pub screen_height: i32,
    pub score: u64,
    /// Ticks left before the intro speech
    pub start_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub guy: Guy,
    /// Fixed pool; slots are reset in place, never replaced
    pub stars: [Star; STAR_BATCH_SIZE],
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let guy = Guy::new(SCREEN_WIDTH, SCREEN_HEIGHT, &tuning);
        let stars = std::array::from_fn(|_| Star::new(SCREEN_WIDTH, SCREEN_HEIGHT, &mut rng));

        Self {
            seed,
            rng,
            tuning,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            score: 0,
            start_timer: 0,
            time_ticks: 0,
            guy,
            stars,
        }
    }

    /// Start a new round: zero the score, re-arm the intro, reset every entity
    pub fn reset(&mut self) {
        self.start_timer = START_TIMER_MAX;
        self.score = 0;
        self.time_ticks = 0;
        // The guy never starts smaller than the default screen
        self.guy.reset(
            self.screen_width.max(SCREEN_WIDTH),
            self.screen_height.max(SCREEN_HEIGHT),
        );
        for star in &mut self.stars {
            star.reset(self.screen_width, self.screen_height, &mut self.rng);
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.screen_width = width;
        self.screen_height = height;
    }
}
