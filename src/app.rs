//! Frame driver
//!
//! Runs input -> simulation -> render once per iteration, as fast as the
//! host presents frames. There is no fixed timestep.

use crate::input::{InputSampler, InputSnapshot};
use crate::renderer::{Renderer, render};
use crate::settings::Settings;
use crate::sim::{FrameClock, GameMode, GameState, tick};

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Running,
    Terminated,
}

/// What the driver needs from the windowing layer
pub trait Host {
    /// Drain pending events and read live key/stick state. Never blocks.
    fn poll_input(&mut self) -> InputSnapshot;

    /// Monotonic time in seconds
    fn seconds(&self) -> f32;

    /// Show the frame just rendered
    fn present(&mut self);

    /// Single/two-player mode switched (open or close the second joystick)
    fn mode_changed(&mut self, mode: GameMode);
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    sampler: InputSampler,
    clock: FrameClock,
    status: AppStatus,
}

impl Game {
    /// `start_seconds` is the host clock at startup, so the first frame's
    /// delta is measured from there
    pub fn new(settings: &Settings, start_seconds: f32) -> Self {
        Self {
            state: GameState::new(),
            sampler: InputSampler::from_settings(settings),
            clock: FrameClock::new(start_seconds),
            status: AppStatus::Running,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    /// One full iteration. A quit seen during input still finishes the
    /// frame; the loop stops before the next one.
    pub fn frame<H, R>(&mut self, host: &mut H, renderer: &mut R) -> AppStatus
    where
        H: Host + ?Sized,
        R: Renderer + ?Sized,
    {
        let snapshot = host.poll_input();
        let input = self.sampler.apply(&snapshot, &mut self.state);

        if input.quit {
            log::info!("Quit requested");
            self.status = AppStatus::Terminated;
        }
        if let Some(mode) = input.mode_changed {
            log::info!("Switched to {:?}", mode);
            host.mode_changed(mode);
        }
        if input.launched {
            log::debug!("Ball served");
        }

        let dt = self.clock.delta(host.seconds());
        let events = tick(&mut self.state, dt);
        if let Some(side) = events.paddle_hit {
            log::debug!("Ball hit {:?} paddle, spin {:.2}", side, self.state.ball.movement.y);
        }
        if events.ball_reset {
            log::debug!("Ball left the court after {} frames", self.state.frame);
        }

        render(&self.state, renderer);
        host.present();

        self.status
    }

    /// Loop until a quit signal arrives
    pub fn run<H, R>(&mut self, host: &mut H, renderer: &mut R)
    where
        H: Host + ?Sized,
        R: Renderer + ?Sized,
    {
        while self.status == AppStatus::Running {
            self.frame(host, renderer);
        }
        log::info!("Stopped after {} frames", self.state.frame);
    }
}
