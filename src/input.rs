//! Input sampling
//!
//! The platform layer drains OS events and reads live keyboard/joystick
//! state into an `InputSnapshot`. `InputSampler` turns that snapshot into
//! paddle intent and game events, so none of this touches SDL directly.

use crate::settings::{ModeToggle, Settings};
use crate::sim::{GameMode, GameState, PaddleSide};

/// Keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Paddle 1
    pub up: bool,
    pub down: bool,
    /// Paddle 2 (two-player mode)
    pub w: bool,
    pub s: bool,
    /// Switch single/two-player
    pub toggle_mode: bool,
    /// Serve the ball
    pub launch: bool,
}

/// Vertical stick deflection per joystick slot, -1.0 (down) to 1.0 (up).
/// `None` when no joystick is open in that slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickState {
    pub primary: Option<f32>,
    pub secondary: Option<f32>,
}

/// Everything read from the platform for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// A quit or window-close event was drained
    pub quit: bool,
    pub keys: KeyState,
    pub sticks: StickState,
}

/// Events produced while applying a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    /// The new mode, if it changed this frame
    pub mode_changed: Option<GameMode>,
    /// The ball was served this frame
    pub launched: bool,
}

/// +1 for up, -1 for down, up wins when both are held
#[inline]
pub fn key_axis(up: bool, down: bool) -> f32 {
    if up {
        1.0
    } else if down {
        -1.0
    } else {
        0.0
    }
}

/// Stick deflection as a paddle direction, ignoring the dead zone
#[inline]
pub fn stick_axis(deflection: Option<f32>, dead_zone: f32) -> f32 {
    match deflection {
        Some(v) if v.abs() > dead_zone => v.signum(),
        _ => 0.0,
    }
}

/// Greedy tracking: head for the ball's height. No dead zone, so the
/// paddle jitters when lined up with the ball.
#[inline]
pub fn follow_ball(paddle_y: f32, ball_y: f32) -> f32 {
    if paddle_y > ball_y { -1.0 } else { 1.0 }
}

/// Applies snapshots to the game state
#[derive(Debug, Clone)]
pub struct InputSampler {
    toggle: ModeToggle,
    dead_zone: f32,
    /// Toggle key state on the previous frame (edge detection)
    toggle_held: bool,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(ModeToggle::EdgeTriggered, 0.25)
    }
}

impl InputSampler {
    pub fn new(toggle: ModeToggle, dead_zone: f32) -> Self {
        Self {
            toggle,
            dead_zone,
            toggle_held: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mode_toggle, settings.effective_dead_zone())
    }

    fn toggle_fires(&mut self, held: bool) -> bool {
        let fires = match self.toggle {
            ModeToggle::EdgeTriggered => held && !self.toggle_held,
            ModeToggle::EveryFrame => held,
        };
        self.toggle_held = held;
        fires
    }

    /// Write this frame's intent into `state`
    pub fn apply(&mut self, snapshot: &InputSnapshot, state: &mut GameState) -> FrameInput {
        for paddle in &mut state.paddles {
            paddle.movement.y = 0.0;
        }

        let mut frame = FrameInput {
            quit: snapshot.quit,
            ..Default::default()
        };
        let keys = &snapshot.keys;

        let mut right = key_axis(keys.up, keys.down);
        if right == 0.0 {
            right = stick_axis(snapshot.sticks.primary, self.dead_zone);
        }
        state.paddle_mut(PaddleSide::Right).movement.y = right;

        if self.toggle_fires(keys.toggle_mode) {
            state.mode = state.mode.toggled();
            frame.mode_changed = Some(state.mode);
        }

        if keys.launch {
            frame.launched = state.ball.launch();
        }

        let left = match state.mode {
            GameMode::TwoPlayer => {
                let keyed = key_axis(keys.w, keys.s);
                if keyed == 0.0 {
                    stick_axis(snapshot.sticks.secondary, self.dead_zone)
                } else {
                    keyed
                }
            }
            GameMode::SinglePlayer => {
                follow_ball(state.paddle(PaddleSide::Left).position.y, state.ball.position.y)
            }
        };
        state.paddle_mut(PaddleSide::Left).movement.y = left;

        frame
    }
}
