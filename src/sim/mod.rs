//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (pool index)
//! - No platform dependencies

pub mod guy;
pub mod motion;
pub mod star;
pub mod state;
pub mod tick;

pub use guy::{EXCLAMATIONS, Face, Guy};
pub use motion::{Entity, Motion, Vector2, VectorExt};
pub use star::{Star, StarColor, StarPhase};
pub use state::GameState;
pub use tick::{TickReport, check_star_collisions, tick};
