//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Same state, input and dt always give the same result
//! - No randomness, serves are fixed
//! - No rendering or platform dependencies

pub mod collision;
pub mod fixed_step;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{Axis, ContactKind, PaddleContact};
pub use fixed_step::FixedStep;
pub use state::{
    Arena, Ball, Cooldown, GameEvent, GameState, Paddle, PauseState, Score, Side,
};
pub use tick::{StepError, TickInput, clamp_dt, tick};
