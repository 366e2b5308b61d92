//! Game settings
//!
//! Window, physics tuning and runner parameters, loaded from JSON. Missing
//! fields fall back to the defaults below.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::channels;
use crate::consts::PADDLE_VEL_TRANSFER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,

    // === Session ===
    /// RNG seed for the launch heading; derived from the clock when absent
    pub seed: Option<u64>,
    /// Right paddle is player-controlled; otherwise the right edge is a wall
    pub two_player: bool,

    // === Physics ===
    /// Strength of the black hole at the window center
    pub central_mass: f32,
    /// Drag coefficient applied above the drag threshold speed
    pub air_resistance: f32,
    /// Share of paddle speed handed to the projectile on a face hit
    pub velocity_transfer: f32,

    // === Headless runner ===
    pub frames: u32,
    /// Fixed frame time (seconds)
    pub frame_time: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            title: "Gravity Pong".to_string(),

            seed: None,
            two_player: true,

            central_mass: 0.1,
            air_resistance: 1.0,
            velocity_transfer: PADDLE_VEL_TRANSFER,

            frames: 1440,
            frame_time: 1.0 / 144.0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        log::info!(target: channels::GAME, "Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }
}
