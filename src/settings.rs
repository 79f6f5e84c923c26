//! Presentation settings
//!
//! Read from an optional JSON file next to the executable. Game rules
//! (court size, speeds, paddle dimensions) live in `consts` and are not
//! configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{PongError, Result};

/// Default settings file, looked up in the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "pong.json";

/// How the mode-toggle key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModeToggle {
    /// One flip per key press
    #[default]
    EdgeTriggered,
    /// Flip on every frame the key is held (legacy flicker)
    EveryFrame,
}

impl ModeToggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeToggle::EdgeTriggered => "edge_triggered",
            ModeToggle::EveryFrame => "every_frame",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "edge" | "edge_triggered" => Some(ModeToggle::EdgeTriggered),
            "every_frame" | "legacy" => Some(ModeToggle::EveryFrame),
            _ => None,
        }
    }
}

/// Window, shader and input preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    // === Shaders ===
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,

    // === Input ===
    pub mode_toggle: ModeToggle,
    /// Normalized stick deflection (0.0 - 1.0) ignored around center
    pub joystick_dead_zone: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pong".to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            vertex_shader: PathBuf::from("shaders/vertex.glsl"),
            fragment_shader: PathBuf::from("shaders/fragment.glsl"),

            mode_toggle: ModeToggle::EdgeTriggered,
            joystick_dead_zone: 0.25,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|source| PongError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings if the file exists, otherwise use defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let settings = Self::load(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| PongError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Dead zone clamped into a usable range
    pub fn effective_dead_zone(&self) -> f32 {
        self.joystick_dead_zone.clamp(0.0, 0.95)
    }
}
