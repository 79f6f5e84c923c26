//! Frame driver tests with a scripted host and a recording renderer

use std::collections::VecDeque;

use glam::{Mat4, Vec3};
use sdl_pong::app::{AppStatus, Game, Host};
use sdl_pong::consts::*;
use sdl_pong::input::{InputSnapshot, KeyState};
use sdl_pong::renderer::{Renderer, TextureId};
use sdl_pong::settings::{ModeToggle, Settings};
use sdl_pong::sim::{GameMode, PaddleSide, model_matrix};

const DT: f32 = 0.02;

/// Plays back snapshots, one per frame, with a clock advancing by `DT`
struct ScriptedHost {
    script: VecDeque<InputSnapshot>,
    now: f32,
    presented: usize,
    modes: Vec<GameMode>,
}

impl ScriptedHost {
    fn new(script: Vec<InputSnapshot>) -> Self {
        Self {
            script: script.into(),
            now: 0.0,
            presented: 0,
            modes: Vec::new(),
        }
    }
}

impl Host for ScriptedHost {
    fn poll_input(&mut self) -> InputSnapshot {
        self.now += DT;
        self.script.pop_front().unwrap_or(InputSnapshot {
            quit: true,
            ..Default::default()
        })
    }

    fn seconds(&self) -> f32 {
        self.now
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn mode_changed(&mut self, mode: GameMode) {
        self.modes.push(mode);
    }
}

#[derive(Default)]
struct RecordingRenderer {
    clears: usize,
    draws: Vec<(Mat4, Option<TextureId>)>,
}

impl Renderer for RecordingRenderer {
    fn set_model_matrix(&mut self, _matrix: &Mat4) {}
    fn set_view_matrix(&mut self, _matrix: &Mat4) {}
    fn set_projection_matrix(&mut self, _matrix: &Mat4) {}
    fn set_colour(&mut self, _red: f32, _green: f32, _blue: f32, _alpha: f32) {}

    fn program_id(&self) -> u32 {
        1
    }

    fn position_attribute(&self) -> u32 {
        0
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_quad(&mut self, model: &Mat4, texture: Option<TextureId>) {
        self.draws.push((*model, texture));
    }
}

fn pressing(f: impl FnOnce(&mut KeyState)) -> InputSnapshot {
    let mut snapshot = InputSnapshot::default();
    f(&mut snapshot.keys);
    snapshot
}

#[test]
fn test_quit_terminates_loop() {
    let mut host = ScriptedHost::new(vec![InputSnapshot::default(); 4]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);

    game.run(&mut host, &mut renderer);

    assert_eq!(game.status(), AppStatus::Terminated);
    // Four scripted frames plus the one that saw the quit
    assert_eq!(host.presented, 5);
    assert_eq!(renderer.clears, 5);
    assert_eq!(game.state().frame, 5);
}

#[test]
fn test_three_untextured_quads_per_frame() {
    let mut host = ScriptedHost::new(vec![InputSnapshot::default()]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);

    assert_eq!(game.frame(&mut host, &mut renderer), AppStatus::Running);
    assert_eq!(renderer.draws.len(), 3);
    assert!(renderer.draws.iter().all(|(_, texture)| texture.is_none()));

    let state = game.state();
    assert_eq!(renderer.draws[0].0, state.paddle(PaddleSide::Right).model);
    assert_eq!(renderer.draws[1].0, state.paddle(PaddleSide::Left).model);
    assert_eq!(renderer.draws[2].0, model_matrix(Vec3::ZERO, BALL_SCALE));
}

#[test]
fn test_launch_moves_ball_right() {
    let mut host = ScriptedHost::new(vec![
        pressing(|k| k.launch = true),
        InputSnapshot::default(),
    ]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);

    game.frame(&mut host, &mut renderer);
    let after_serve = game.state().ball.position.x;
    assert_eq!(game.state().ball.movement.x, 1.0);
    assert!((after_serve - BALL_SPEED * DT).abs() < 1e-5);

    game.frame(&mut host, &mut renderer);
    let moved = game.state().ball.position.x - after_serve;
    assert!((moved - BALL_SPEED * DT).abs() < 1e-5);
}

#[test]
fn test_mode_toggle_reaches_host_once_per_press() {
    let held = pressing(|k| k.toggle_mode = true);
    let mut host = ScriptedHost::new(vec![held, held, held, InputSnapshot::default(), held]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);

    game.run(&mut host, &mut renderer);

    assert_eq!(host.modes, vec![GameMode::TwoPlayer, GameMode::SinglePlayer]);
    assert_eq!(game.state().mode, GameMode::SinglePlayer);
}

#[test]
fn test_legacy_toggle_flickers_through_host() {
    let settings = Settings {
        mode_toggle: ModeToggle::EveryFrame,
        ..Default::default()
    };
    let held = pressing(|k| k.toggle_mode = true);
    let mut host = ScriptedHost::new(vec![held, held, held]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&settings, 0.0);

    game.run(&mut host, &mut renderer);

    assert_eq!(
        host.modes,
        vec![GameMode::TwoPlayer, GameMode::SinglePlayer, GameMode::TwoPlayer]
    );
}

#[test]
fn test_rally_returns_ball_from_right_paddle() {
    let mut host = ScriptedHost::new(vec![InputSnapshot::default(); 1]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);
    {
        let ball = &mut game.state_mut().ball;
        ball.position = Vec3::new(3.8, 0.0, 0.0);
        ball.movement = Vec3::new(1.0, 0.0, 0.0);
    }

    game.frame(&mut host, &mut renderer);

    let ball = &game.state().ball;
    assert_eq!(ball.movement.x, -1.0);
    let flush = PADDLE1_START.x - (BALL_SCALE.x + PADDLE_SCALE.x) / 2.0;
    assert!((ball.position.x - flush).abs() < 1e-6);
    assert_eq!(renderer.draws[2].0, ball.model);
}

#[test]
fn test_right_paddle_follows_arrow_keys() {
    let mut host = ScriptedHost::new(vec![pressing(|k| k.down = true); 10]);
    let mut renderer = RecordingRenderer::default();
    let mut game = Game::new(&Settings::default(), 0.0);

    game.run(&mut host, &mut renderer);

    // Ten frames of movement; the quit frame resets intent to zero
    let y = game.state().paddle(PaddleSide::Right).position.y;
    assert!((y + 10.0 * PADDLE_SPEED * DT).abs() < 1e-4);
}
