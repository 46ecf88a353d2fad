//! Presentation settings
//!
//! Window and output preferences, read once at startup from an optional JSON
//! file. Physics lives in [`crate::Tuning`] and is not configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "PONG_SETTINGS";

/// Startup settings; missing fields take their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    pub title: String,
    /// Present with vsync (Fifo) instead of the lowest-latency mode
    pub vsync: bool,

    // === Rendering ===
    /// Triangles in the ball's circle fan
    pub ball_segments: u32,

    // === Console ===
    /// Print `L - R` to stdout whenever a point is scored
    pub print_scores: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            vsync: true,
            ball_segments: BALL_SEGMENTS,
            print_scores: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by `PONG_SETTINGS`, if set
    pub fn from_env() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    /// Replace values the window or mesh builder cannot use
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if self.width == 0 || self.height == 0 {
            log::warn!(
                "Ignoring window size {}x{}, using {}x{}",
                self.width,
                self.height,
                defaults.width,
                defaults.height
            );
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if self.ball_segments < 3 {
            log::warn!("Ball needs at least 3 segments, got {}", self.ball_segments);
            self.ball_segments = defaults.ball_segments;
        }
    }
}
