//! Game state and core simulation types
//!
//! One `GameState` lives for the whole program, owned by the frame driver.

use glam::{Mat4, Vec3};

use crate::consts::*;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    /// Paddle 1, right side, arrow keys
    Right,
    /// Paddle 2, left side, W/S keys or AI
    Left,
}

impl PaddleSide {
    pub fn index(self) -> usize {
        match self {
            PaddleSide::Right => 0,
            PaddleSide::Left => 1,
        }
    }
}

/// Who drives paddle 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Paddle 2 follows the ball
    #[default]
    SinglePlayer,
    /// Paddle 2 is human controlled
    TwoPlayer,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::SinglePlayer => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::SinglePlayer,
        }
    }
}

/// Translate then scale, so the unit quad ends up `scale` sized at `position`
#[inline]
pub fn model_matrix(position: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(scale)
}

/// A paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: PaddleSide,
    pub position: Vec3,
    /// Only `y` is ever nonzero: -1, 0 or +1
    pub movement: Vec3,
    pub model: Mat4,
}

impl Paddle {
    pub fn new(side: PaddleSide) -> Self {
        let position = match side {
            PaddleSide::Right => PADDLE1_START,
            PaddleSide::Left => PADDLE2_START,
        };
        Self {
            side,
            position,
            movement: Vec3::ZERO,
            model: model_matrix(position, PADDLE_SCALE),
        }
    }

    /// Largest |y| a paddle center may reach (exclusive)
    #[inline]
    pub fn y_limit() -> f32 {
        ORTHO_HEIGHT / 2.0 - PADDLE_SCALE.y / 2.0
    }

    pub fn rebuild_model(&mut self) {
        self.model = model_matrix(self.position, PADDLE_SCALE);
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec3,
    /// x is -1, 0 or +1; y is the spin ratio from the last paddle hit
    pub movement: Vec3,
    pub model: Mat4,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: BALL_START,
            movement: Vec3::ZERO,
            model: model_matrix(BALL_START, BALL_SCALE),
        }
    }
}

impl Ball {
    /// Back to center, at rest
    pub fn reset(&mut self) {
        self.position = BALL_START;
        self.movement = Vec3::ZERO;
    }

    pub fn is_at_rest(&self) -> bool {
        self.movement.x == 0.0
    }

    /// Serve toward the right if the ball isn't already moving horizontally
    pub fn launch(&mut self) -> bool {
        if self.is_at_rest() {
            self.movement.x = 1.0;
            true
        } else {
            false
        }
    }

    pub fn rebuild_model(&mut self) {
        self.model = model_matrix(self.position, BALL_SCALE);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Indexed by `PaddleSide::index`
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub mode: GameMode,
    /// Simulation step counter
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            paddles: [Paddle::new(PaddleSide::Right), Paddle::new(PaddleSide::Left)],
            ball: Ball::default(),
            mode: GameMode::SinglePlayer,
            frame: 0,
        }
    }

    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: PaddleSide) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Model matrices in draw order: paddles first, then the ball
    pub fn models(&self) -> [Mat4; 3] {
        [self.paddles[0].model, self.paddles[1].model, self.ball.model]
    }
}
