//! Property tests for the bound invariants

use glam::Vec3;
use proptest::prelude::*;

use super::state::{GameState, Paddle, PaddleSide};
use super::tick::tick;
use crate::consts::*;

fn intent() -> impl Strategy<Value = f32> {
    prop_oneof![Just(-1.0f32), Just(0.0f32), Just(1.0f32)]
}

proptest! {
    #[test]
    fn paddles_never_leave_court(
        frames in prop::collection::vec((intent(), intent(), 0.0f32..1.5), 1..200)
    ) {
        let mut state = GameState::new();
        for (right, left, dt) in frames {
            state.paddle_mut(PaddleSide::Right).movement.y = right;
            state.paddle_mut(PaddleSide::Left).movement.y = left;
            tick(&mut state, dt);
            for paddle in &state.paddles {
                prop_assert!(paddle.position.y.abs() < Paddle::y_limit());
                prop_assert_eq!(paddle.position.z, 0.0);
            }
        }
    }

    #[test]
    fn wall_bounce_keeps_y(
        y in -3.6f32..3.6,
        vy in -3.0f32..3.0,
        dt in 0.0f32..0.5,
    ) {
        let mut state = GameState::new();
        state.ball.position = Vec3::new(0.0, y, 0.0);
        state.ball.movement = Vec3::new(0.0, vy, 0.0);
        let tentative_y = y + vy * BALL_SPEED * dt;
        let inside = ORTHO_HEIGHT / 2.0 - tentative_y.abs() - BALL_SCALE.y / 2.0 > 0.0;

        let events = tick(&mut state, dt);
        if inside {
            prop_assert!(!events.wall_bounce);
            prop_assert_eq!(state.ball.position.y, tentative_y);
        } else {
            prop_assert!(events.wall_bounce);
            prop_assert_eq!(state.ball.position.y, y);
            prop_assert_eq!(state.ball.movement.y, -vy);
        }
    }

    #[test]
    fn leaving_court_always_resets(
        x in 4.93f32..20.0,
        left in any::<bool>(),
        y in -3.0f32..3.0,
        vx in prop_oneof![Just(-1.0f32), Just(1.0f32)],
        vy in -10.0f32..10.0,
    ) {
        let mut state = GameState::new();
        let x = if left { -x } else { x };
        state.ball.position = Vec3::new(x, y, 0.0);
        state.ball.movement = Vec3::new(vx, vy, 0.0);

        // dt = 0: the tentative position is the current one
        let events = tick(&mut state, 0.0);
        prop_assert!(events.ball_reset);
        prop_assert_eq!(state.ball.position, BALL_START);
        prop_assert_eq!(state.ball.movement, Vec3::ZERO);
    }
}
