//! Simulation module
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - One `advance` per frame, no wall-clock time
//! - Seeded RNG only, used once for the serve
//! - Stable iteration order (bricks by grid index)
//! - No rendering or platform dependencies

pub mod input;
pub mod physics;
pub mod state;

pub use input::{Key, on_key};
pub use physics::{GameEvent, advance};
pub use state::{Ball, Brick, BrickLayout, GamePhase, GameSession, Paddle};
