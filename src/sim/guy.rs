//! The guy: the character the player flings around
//!
//! Reactions (surprised, squashed on the floor, chewing, talking) are four
//! independent countdowns rather than one state enum. They overlap freely and
//! the renderer picks a face from their current values.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion::{Entity, Motion, VectorExt};
use crate::consts::*;
use crate::renderer::{DrawCommand, TextMetrics, shapes};
use crate::tuning::Tuning;

/// Things the guy might say after a star
pub const EXCLAMATIONS: [&str; 14] = [
    "Mmmm!",
    "Delicious!",
    "Delectable!",
    "Ooo... that one\nwas savory.",
    "Spicy!",
    "Scrumptious!",
    "Tastey",
    "NOM NOM NOM",
    "More!",
    "Tastacular!",
    "De-lish!",
    "Crunchy!",
    "That one\nhit the spot!",
    "Do I detect\na hint of helium?",
];

/// Face to draw, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Eating,
    Surprised,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guy {
    pub motion: Motion,
    tuning: Tuning,
    facing_left: bool,
    hit_timer: u32,
    floor_timer: u32,
    eat_timer: u32,
    speech_timer: u32,
    speech: String,
}

impl Guy {
    pub fn new(screen_width: i32, screen_height: i32, tuning: &Tuning) -> Self {
        let mut guy = Self {
            motion: Motion::default(),
            tuning: *tuning,
            facing_left: false,
            hit_timer: 0,
            floor_timer: 0,
            eat_timer: 0,
            speech_timer: 0,
            speech: String::new(),
        };
        guy.reset(screen_width, screen_height);
        guy
    }

    /// Center the guy, clear every reaction and put gravity back
    pub fn reset(&mut self, screen_width: i32, screen_height: i32) {
        self.speech_timer = 0;
        self.speech.clear();
        self.hit_timer = 0;
        self.floor_timer = 0;
        self.eat_timer = 0;
        self.facing_left = false;
        self.motion.pos = Vec2::new((screen_width / 2) as f32, (screen_height / 2) as f32);
        self.motion.vel.reset();
        self.motion.acc = Vec2::new(0.0, self.tuning.gravity);
    }

    /// Integrate, keep on screen, then run down the timers
    pub fn update(&mut self, screen_width: i32, screen_height: i32) {
        self.integrate();
        self.enforce_boundaries(screen_width, screen_height);

        self.hit_timer = self.hit_timer.saturating_sub(1);
        self.floor_timer = self.floor_timer.saturating_sub(1);
        self.eat_timer = self.eat_timer.saturating_sub(1);
        self.speech_timer = self.speech_timer.saturating_sub(1);
    }

    /// Bounce off the side walls and the floor. The top is open.
    pub fn enforce_boundaries(&mut self, screen_width: i32, screen_height: i32) {
        let inset = self.tuning.wall_inset();
        let elasticity = self.tuning.elasticity;
        let mo = &mut self.motion;

        if mo.pos.x < inset {
            mo.pos.x = inset;
            mo.vel.x = -mo.vel.x * elasticity;
            self.hit_timer = HIT_MAX;
            self.facing_left = true;
        } else if mo.pos.x > screen_width as f32 - inset {
            mo.pos.x = screen_width as f32 - inset;
            mo.vel.x = -mo.vel.x * elasticity;
            self.hit_timer = HIT_MAX;
            self.facing_left = false;
        }

        let floor = screen_height as f32 - inset;
        if mo.pos.y > floor {
            self.floor_timer = FLOOR_MAX;
            mo.pos.y = floor;
            mo.vel.y = -mo.vel.y * elasticity;

            // Friction opposes motion; clamp when a step would carry it past zero
            let friction = self.tuning.friction;
            if mo.vel.x < 0.0 {
                mo.vel.x += friction;
                if mo.vel.x > 0.0 {
                    mo.vel.x = 0.0;
                }
            }
            if mo.vel.x > 0.0 {
                mo.vel.x -= friction;
                if mo.vel.x < 0.0 {
                    mo.vel.x = 0.0;
                }
            }
        }
    }

    /// Chomp. One time in ten the guy also says something about it.
    ///
    /// Returns `true` if he spoke.
    pub fn eat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.eat_timer = EAT_COUNT_MAX;
        if rng.random_range(0..10) == 0 {
            let line = EXCLAMATIONS[rng.random_range(0..EXCLAMATIONS.len())];
            self.talk(line);
            return true;
        }
        false
    }

    /// Open the mouth as if eating, without the eating
    pub fn look_up(&mut self) {
        self.eat_timer = EAT_COUNT_MAX;
    }

    /// Show `text` in the speech bubble for three ticks per character
    pub fn talk(&mut self, text: impl Into<String>) {
        self.speech = text.into();
        self.speech_timer = self.speech.chars().count() as u32 * SPEECH_TICKS_PER_CHAR;
        log::debug!("Guy says {:?}", self.speech);
    }

    pub fn face(&self) -> Face {
        if self.eat_timer > 0 {
            Face::Eating
        } else if self.hit_timer > 0 && self.floor_timer == 0 {
            Face::Surprised
        } else {
            Face::Neutral
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speech_timer > 0
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn radius(&self) -> i32 {
        self.tuning.guy_radius
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    pub fn hit_timer(&self) -> u32 {
        self.hit_timer
    }

    pub fn floor_timer(&self) -> u32 {
        self.floor_timer
    }

    pub fn eat_timer(&self) -> u32 {
        self.eat_timer
    }

    pub fn speech_timer(&self) -> u32 {
        self.speech_timer
    }

    pub fn speech(&self) -> &str {
        &self.speech
    }
}

impl Entity for Guy {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn size(&self) -> i32 {
        self.tuning.guy_radius
    }

    fn draw(&self, metrics: &dyn TextMetrics, out: &mut Vec<DrawCommand>) {
        shapes::guy_body(self, out);
        shapes::guy_face(self, out);
        if self.is_speaking() {
            shapes::speech_bubble(self, metrics, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn guy() -> Guy {
        Guy::new(SCREEN_WIDTH, SCREEN_HEIGHT, &Tuning::default())
    }

    #[test]
    fn test_reset_centers_with_gravity() {
        let mut g = guy();
        g.motion.pos = Vec2::new(1.0, 2.0);
        g.motion.vel = Vec2::new(9.0, 9.0);
        g.talk("hi");
        g.look_up();

        g.reset(641, 481);

        assert_eq!(g.motion.pos, Vec2::new(320.0, 240.0));
        assert_eq!(g.motion.vel, Vec2::ZERO);
        assert_eq!(g.motion.acc, Vec2::new(0.0, 3.0));
        assert_eq!(g.eat_timer(), 0);
        assert_eq!(g.speech_timer(), 0);
        assert!(!g.facing_left());
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut g = guy();
        let inset = 32.0 + 4.0;
        g.motion.pos = Vec2::new(inset - 1.0, 200.0);
        g.motion.vel = Vec2::new(-8.0, 0.0);

        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);

        assert_eq!(g.motion.pos.x, inset);
        assert_eq!(g.motion.vel.x, 8.0 * 0.75);
        assert_eq!(g.hit_timer(), 24);
        assert!(g.facing_left());
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut g = guy();
        g.facing_left = true;
        g.motion.pos = Vec2::new(700.0, 200.0);
        g.motion.vel = Vec2::new(12.0, 0.0);

        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);

        assert_eq!(g.motion.pos.x, 640.0 - 36.0);
        assert_eq!(g.motion.vel.x, -9.0);
        assert_eq!(g.hit_timer(), 24);
        assert!(!g.facing_left());
    }

    #[test]
    fn test_floor_bounce_and_friction() {
        let mut g = guy();
        let floor = 480.0 - 36.0;
        g.motion.pos = Vec2::new(300.0, floor + 10.0);
        g.motion.vel = Vec2::new(10.0, 8.0);

        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(g.motion.pos.y, floor);
        assert_eq!(g.motion.vel.y, -6.0);
        assert_eq!(g.floor_timer(), 5);
        assert_eq!(g.motion.vel.x, 5.0);

        g.motion.pos.y = floor + 1.0;
        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(g.motion.vel.x, 0.0);

        g.motion.pos.y = floor + 1.0;
        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(g.motion.vel.x, 0.0);
    }

    #[test]
    fn test_friction_clamps_instead_of_overshooting() {
        let mut g = guy();
        g.motion.pos = Vec2::new(300.0, 1000.0);
        g.motion.vel = Vec2::new(-3.0, 0.0);

        g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(g.motion.vel.x, 0.0);
    }

    #[test]
    fn test_talk_sets_timer_from_length() {
        let mut g = guy();
        g.talk("NOM NOM NOM");
        assert_eq!(g.speech(), "NOM NOM NOM");
        assert_eq!(g.speech_timer(), 33);
        assert!(g.is_speaking());
    }

    #[test]
    fn test_face_priority() {
        let mut g = guy();
        assert_eq!(g.face(), Face::Neutral);

        g.hit_timer = 10;
        assert_eq!(g.face(), Face::Surprised);

        // Floor contact wins over surprise
        g.floor_timer = 3;
        assert_eq!(g.face(), Face::Neutral);

        // Eating wins over everything, even with the floor timer pending
        g.eat_timer = 1;
        assert_eq!(g.face(), Face::Eating);
    }

    #[test]
    fn test_eat_sometimes_talks() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut g = guy();
        let mut spoke = 0;
        for _ in 0..500 {
            if g.eat(&mut rng) {
                spoke += 1;
                assert!(EXCLAMATIONS.contains(&g.speech()));
            }
            assert_eq!(g.eat_timer(), EAT_COUNT_MAX);
        }
        assert!(spoke > 10 && spoke < 120, "spoke {spoke} times");
    }

    #[test]
    fn test_look_up_is_silent() {
        let mut g = guy();
        g.look_up();
        assert_eq!(g.eat_timer(), 16);
        assert!(!g.is_speaking());
    }

    #[test]
    fn test_timers_stop_at_zero() {
        let mut g = guy();
        g.talk("ab");
        for _ in 0..20 {
            g.update(SCREEN_WIDTH, SCREEN_HEIGHT);
        }
        assert_eq!(g.speech_timer(), 0);
        assert_eq!(g.eat_timer(), 0);
        assert_eq!(g.hit_timer(), 0);
    }

    proptest! {
        #[test]
        fn prop_timers_count_down_by_one(
            hit in 0u32..30,
            floor in 0u32..10,
            eat in 0u32..20,
            speech in 0u32..300,
        ) {
            let mut g = guy();
            // Float in the middle of the screen so nothing re-arms a timer
            g.motion.acc = Vec2::ZERO;
            g.hit_timer = hit;
            g.floor_timer = floor;
            g.eat_timer = eat;
            g.speech_timer = speech;

            g.update(SCREEN_WIDTH, SCREEN_HEIGHT);

            prop_assert_eq!(g.hit_timer(), hit.saturating_sub(1));
            prop_assert_eq!(g.floor_timer(), floor.saturating_sub(1));
            prop_assert_eq!(g.eat_timer(), eat.saturating_sub(1));
            prop_assert_eq!(g.speech_timer(), speech.saturating_sub(1));
        }

        #[test]
        fn prop_stays_inside_walls(x in -500.0f32..1500.0, y in -500.0f32..1500.0, vx in -80.0f32..80.0) {
            let mut g = guy();
            g.motion.pos = Vec2::new(x, y);
            g.motion.vel = Vec2::new(vx, 0.0);

            g.enforce_boundaries(SCREEN_WIDTH, SCREEN_HEIGHT);

            prop_assert!(g.motion.pos.x >= 36.0 && g.motion.pos.x <= 604.0);
            prop_assert!(g.motion.pos.y <= 444.0);
        }
    }
}
