//! Ball/paddle collision detection
//!
//! Everything is an axis-aligned box: a unit quad scaled by `BALL_SCALE` or
//! `PADDLE_SCALE`. A negative gap on an axis means the boxes overlap there.

use glam::{Vec2, Vec3};

use super::state::{Paddle, PaddleSide};
use crate::consts::*;

/// Sum of ball and paddle half extents
#[inline]
pub fn combined_half_extents() -> Vec2 {
    Vec2::new(
        (BALL_SCALE.x + PADDLE_SCALE.x) / 2.0,
        (BALL_SCALE.y + PADDLE_SCALE.y) / 2.0,
    )
}

/// Distance between edges on each axis (negative = overlapping on that axis)
pub fn gap(ball_pos: Vec3, paddle_pos: Vec3) -> Vec2 {
    let centers = Vec2::new(
        (paddle_pos.x - ball_pos.x).abs(),
        (paddle_pos.y - ball_pos.y).abs(),
    );
    centers - combined_half_extents()
}

/// Both axes overlap
#[inline]
pub fn overlaps(gap: Vec2) -> bool {
    gap.x < 0.0 && gap.y < 0.0
}

/// Find the paddle the ball is hitting at `ball_pos`, if any.
///
/// A ball already behind the paddle line (|x| >= paddle 1's x offset) never
/// collides, so a point and a hit cannot happen on the same frame.
pub fn find_paddle_hit(ball_pos: Vec3, paddles: &[Paddle; 2]) -> Option<PaddleSide> {
    if ball_pos.x.abs() >= PADDLE1_START.x {
        return None;
    }
    paddles
        .iter()
        .find(|paddle| overlaps(gap(ball_pos, paddle.position)))
        .map(|paddle| paddle.side)
}

/// Deflection from where the ball met the paddle: 0 at the center, ±1 at the
/// paddle's ends. Not clamped; a corner hit can exceed 1.
#[inline]
pub fn spin_ratio(ball_y: f32, paddle_y: f32) -> f32 {
    (ball_y - paddle_y) / (PADDLE_SCALE.y / 2.0)
}

/// Ball x that sits exactly against the court-facing side of a paddle
#[inline]
pub fn flush_x(paddle_x: f32) -> f32 {
    let offset = combined_half_extents().x;
    if paddle_x > 0.0 {
        paddle_x - offset
    } else {
        paddle_x + offset
    }
}
