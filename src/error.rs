//! Error types
//!
//! Every error here is fatal: startup aborts and `main` exits with code 1.

use std::path::PathBuf;

/// Errors raised while bringing up or running the game
#[derive(thiserror::Error, Debug)]
pub enum PongError {
    /// SDL subsystem initialization or event pump failure
    #[error("SDL error: {0}")]
    Sdl(String),

    /// Window could not be created
    #[error("window could not be created: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    /// OpenGL context creation or activation failure
    #[error("OpenGL context error: {0}")]
    GlContext(String),

    /// Shader source missing, failed to compile, or failed to link
    #[error("shader error ({stage}): {message}")]
    Shader { stage: &'static str, message: String },

    /// Texture could not be read or decoded
    #[error("unable to load texture {}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Malformed settings file
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PongError>;
