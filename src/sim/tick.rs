//! Per-frame simulation step
//!
//! Variable timestep: `dt` is whatever elapsed since the previous frame.
//! Movement intent must already be written into the paddles (see `input`).

use super::collision::{find_paddle_hit, flush_x, spin_ratio};
use super::state::{GameState, PaddleSide};
use crate::consts::*;

/// What happened during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Paddle the ball bounced off
    pub paddle_hit: Option<PaddleSide>,
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball left the court and was put back in the center
    pub ball_reset: bool,
}

/// Tracks frame timestamps and hands out elapsed seconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: f32,
}

impl FrameClock {
    pub fn new(start_seconds: f32) -> Self {
        Self {
            previous: start_seconds,
        }
    }

    /// Seconds since the last call (or since construction)
    pub fn delta(&mut self, now_seconds: f32) -> f32 {
        let dt = now_seconds - self.previous;
        self.previous = now_seconds;
        dt
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, dt: f32) -> StepEvents {
    let mut events = StepEvents::default();
    state.frame += 1;

    // Paddles: reject moves that would cross the wall rather than clamp
    for paddle in &mut state.paddles {
        let tentative = paddle.position + paddle.movement * PADDLE_SPEED * dt;
        if ORTHO_HEIGHT / 2.0 - tentative.y.abs() - PADDLE_SCALE.y / 2.0 > 0.0 {
            paddle.position = tentative;
        }
        paddle.rebuild_model();
    }

    let ball = &mut state.ball;
    let tentative = ball.position + ball.movement * BALL_SPEED * dt;

    // Top/bottom walls: bounce in place
    if ORTHO_HEIGHT / 2.0 - tentative.y.abs() - BALL_SCALE.y / 2.0 > 0.0 {
        ball.position.y = tentative.y;
    } else {
        ball.movement.y = -ball.movement.y;
        events.wall_bounce = true;
    }

    match find_paddle_hit(tentative, &state.paddles) {
        Some(side) => {
            let paddle = &state.paddles[side.index()];
            ball.movement.x = -ball.movement.x;
            ball.movement.y = spin_ratio(ball.position.y, paddle.position.y);
            ball.position.x = flush_x(paddle.position.x);
            events.paddle_hit = Some(side);
        }
        None => ball.position.x = tentative.x,
    }

    // Point: the ball's far edge crossed the court edge
    if ORTHO_WIDTH / 2.0 - tentative.x.abs() - BALL_SCALE.x / 2.0 < 0.0 {
        ball.reset();
        events.ball_reset = true;
    }

    ball.rebuild_model();
    events
}
