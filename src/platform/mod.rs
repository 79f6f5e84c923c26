//! Platform layer
//!
//! Owns everything SDL: the window and its OpenGL context, the event pump,
//! the millisecond timer and the joysticks. Resources are released in
//! reverse order of acquisition (joysticks first, SDL itself last).

pub mod joystick;

pub use joystick::{JoystickSlots, normalize_axis};

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardState, Scancode};
use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::{EventPump, JoystickSubsystem, Sdl, TimerSubsystem, VideoSubsystem};

use crate::app::Host;
use crate::error::{PongError, Result};
use crate::input::{InputSnapshot, KeyState};
use crate::settings::Settings;
use crate::sim::GameMode;

const MILLISECONDS_IN_SECOND: f32 = 1000.0;

/// Is this event a request to stop?
pub fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            }
    )
}

/// Live key state for the bindings the game uses
pub fn read_keys(keyboard: &KeyboardState) -> KeyState {
    KeyState {
        up: keyboard.is_scancode_pressed(Scancode::Up),
        down: keyboard.is_scancode_pressed(Scancode::Down),
        w: keyboard.is_scancode_pressed(Scancode::W),
        s: keyboard.is_scancode_pressed(Scancode::S),
        toggle_mode: keyboard.is_scancode_pressed(Scancode::T),
        launch: keyboard.is_scancode_pressed(Scancode::Space),
    }
}

/// SDL window with a current OpenGL context.
///
/// Field order is drop order.
pub struct SdlPlatform {
    joysticks: JoystickSlots,
    _gl_context: GLContext,
    window: Window,
    event_pump: EventPump,
    timer: TimerSubsystem,
    joystick_subsystem: JoystickSubsystem,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl SdlPlatform {
    /// Bring up SDL, open the window, create and activate a GL 3.3 core
    /// context and load the GL function pointers
    pub fn new(settings: &Settings) -> Result<Self> {
        let sdl = sdl2::init().map_err(PongError::Sdl)?;
        let video = sdl.video().map_err(PongError::Sdl)?;
        let joystick_subsystem = sdl.joystick().map_err(PongError::Sdl)?;
        let timer = sdl.timer().map_err(PongError::Sdl)?;

        let mut joysticks = JoystickSlots::default();
        joysticks.open_primary(&joystick_subsystem);

        {
            let gl_attr = video.gl_attr();
            gl_attr.set_context_profile(GLProfile::Core);
            gl_attr.set_context_version(3, 3);
        }

        let window = video
            .window(
                &settings.window_title,
                settings.window_width,
                settings.window_height,
            )
            .position_centered()
            .opengl()
            .build()?;

        let gl_context = window.gl_create_context().map_err(PongError::GlContext)?;
        window
            .gl_make_current(&gl_context)
            .map_err(PongError::GlContext)?;
        gl::load_with(|name| video.gl_get_proc_address(name) as *const _);

        let event_pump = sdl.event_pump().map_err(PongError::Sdl)?;

        log::info!(
            "Opened {}x{} window \"{}\"",
            settings.window_width,
            settings.window_height,
            settings.window_title
        );

        Ok(Self {
            joysticks,
            _gl_context: gl_context,
            window,
            event_pump,
            timer,
            joystick_subsystem,
            _video: video,
            _sdl: sdl,
        })
    }

    /// Close input devices, then let SDL go
    pub fn shutdown(mut self) {
        self.joysticks.close_all();
        log::info!("Shutting down SDL");
    }
}

impl Host for SdlPlatform {
    fn poll_input(&mut self) -> InputSnapshot {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            if is_quit(&event) {
                quit = true;
            }
        }
        InputSnapshot {
            quit,
            keys: read_keys(&self.event_pump.keyboard_state()),
            sticks: self.joysticks.sticks(),
        }
    }

    fn seconds(&self) -> f32 {
        self.timer.ticks() as f32 / MILLISECONDS_IN_SECOND
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
    }

    fn mode_changed(&mut self, mode: GameMode) {
        match mode {
            GameMode::TwoPlayer => self.joysticks.open_secondary(&self.joystick_subsystem),
            GameMode::SinglePlayer => self.joysticks.close_secondary(),
        }
    }
}
