//! Pointer input
//!
//! The host pushes raw pointer events into an [`InputQueue`] whenever they
//! arrive. The session drains the queue at the start of each tick and feeds the
//! [`PointerController`], so every entity mutation happens inside `update()`.

pub mod pointer;
pub mod queue;

pub use pointer::{PointerController, launch_velocity, normalize_speed};
pub use queue::{InputQueue, PointerEvent};
