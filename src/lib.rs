//! SDL Pong - two paddles, one ball, OpenGL quads
//!
//! Core modules:
//! - `sim`: Game state and the per-frame simulation step
//! - `input`: Keyboard/joystick snapshot to paddle intent
//! - `renderer`: OpenGL shader program and quad drawing
//! - `platform`: SDL window, GL context, event pump and joysticks
//! - `app`: Frame driver (input -> step -> render)
//! - `settings`: Presentation settings loaded from JSON

pub mod app;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{AppStatus, Game, Host};
pub use error::{PongError, Result};
pub use settings::{ModeToggle, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Window size in pixels
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    /// Court dimensions in world units (the orthographic view volume)
    pub const ORTHO_WIDTH: f32 = 10.0;
    pub const ORTHO_HEIGHT: f32 = 7.5;

    /// Paddle 1 sits on the right, paddle 2 on the left
    pub const PADDLE1_START: Vec3 = Vec3::new(4.0, 0.0, 0.0);
    pub const PADDLE2_START: Vec3 = Vec3::new(-4.0, 0.0, 0.0);
    pub const PADDLE_SCALE: Vec3 = Vec3::new(0.15, 1.0, 1.0);

    pub const BALL_START: Vec3 = Vec3::ZERO;
    pub const BALL_SCALE: Vec3 = Vec3::new(0.15, 0.15, 1.0);

    /// Units per second
    pub const PADDLE_SPEED: f32 = 3.3;
    pub const BALL_SPEED: f32 = 5.0;
}

/// Screen axis for [`screen_to_ortho`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Convert a window pixel coordinate into court coordinates.
///
/// Screen y grows downward, court y grows upward.
pub fn screen_to_ortho(coordinate: f32, axis: Axis) -> f32 {
    use consts::*;
    match axis {
        Axis::X => (coordinate / WINDOW_WIDTH as f32) * ORTHO_WIDTH - ORTHO_WIDTH / 2.0,
        Axis::Y => {
            ((WINDOW_HEIGHT as f32 - coordinate) / WINDOW_HEIGHT as f32) * ORTHO_HEIGHT
                - ORTHO_HEIGHT / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_ortho_corners() {
        assert!((screen_to_ortho(0.0, Axis::X) + 5.0).abs() < 1e-5);
        assert!((screen_to_ortho(640.0, Axis::X) - 5.0).abs() < 1e-5);
        assert!((screen_to_ortho(320.0, Axis::X)).abs() < 1e-5);

        // Top of the window is the top of the court
        assert!((screen_to_ortho(0.0, Axis::Y) - 3.75).abs() < 1e-5);
        assert!((screen_to_ortho(480.0, Axis::Y) + 3.75).abs() < 1e-5);
    }
}
