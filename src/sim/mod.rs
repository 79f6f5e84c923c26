//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the frame driver feeds in elapsed time and reads back model matrices.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{combined_half_extents, find_paddle_hit, flush_x, gap, overlaps, spin_ratio};
pub use state::{Ball, GameMode, GameState, Paddle, PaddleSide, model_matrix};
pub use tick::{FrameClock, StepEvents, tick};

#[cfg(test)]
mod proptests;
