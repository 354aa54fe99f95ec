//! Star Nom - fling the guy around the screen and eat the stars
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, guy, stars, fixed tick)
//! - `input`: Pointer gesture handling and the host event queue
//! - `renderer`: Draw command generation from simulation state
//! - `tuning`: Physics constants handed to the simulation at construction
//! - `game`: Session wrapper driven by an external fixed-rate ticker

pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::StarNom;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Nominal tick period of the host ticker
    pub const TICK_MILLIS: u64 = 24;

    /// Number of stars in the pool
    pub const STAR_BATCH_SIZE: usize = 16;

    /// Ticks before the guy explains how to play
    pub const START_TIMER_MAX: u32 = 90;
    pub const INTRO_TEXT: &str =
        "Ooo, look up there!\nThrow me with your mouse pointer\nso I can catch all these yummy stars!";

    /// Guy reaction timers (ticks)
    pub const HIT_MAX: u32 = 24;
    pub const FLOOR_MAX: u32 = 5;
    pub const EAT_COUNT_MAX: u32 = 16;
    /// Speech stays up for this many ticks per character
    pub const SPEECH_TICKS_PER_CHAR: u32 = 3;

    /// Star size band: [MAX - VARIATION, MAX)
    pub const STAR_MAX_SIZE: i32 = 20;
    pub const STAR_SIZE_VARIATION: i32 = 10;
    /// Launch point and ballistic constants for stars
    pub const STAR_START_X: f32 = -100.0;
    pub const STAR_GRAVITY: f32 = 0.25;
    /// Extra room past the right edge before a star recycles
    pub const STAR_SCREEN_MARGIN: i32 = 20;
    /// Upper bound (exclusive) of the pre-launch delay
    pub const STAR_DELAY_MAX: u32 = 100;
}
