//! SDL Pong entry point
//!
//! Sets up logging, the window and the renderer, then runs the game loop.

use std::process::ExitCode;

use sdl_pong::app::{Game, Host};
use sdl_pong::platform::SdlPlatform;
use sdl_pong::renderer::GlRenderer;
use sdl_pong::settings::{DEFAULT_SETTINGS_PATH, Settings};

fn run() -> sdl_pong::Result<()> {
    let settings = Settings::load_or_default(DEFAULT_SETTINGS_PATH)?;
    log::info!("Mode toggle: {}", settings.mode_toggle.as_str());

    let mut platform = SdlPlatform::new(&settings)?;
    let mut renderer = GlRenderer::new(&settings)?;

    let mut game = Game::new(&settings, platform.seconds());
    log::info!("Pong running! Space serves, T switches player mode");
    game.run(&mut platform, &mut renderer);

    // GL objects go before the context that owns them
    drop(renderer);
    platform.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("SDL Pong starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
