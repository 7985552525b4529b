//! Configuration module - environment variable parsing

use std::env;
use std::path::PathBuf;

use skirmish_core::constants::{FRAME_RATE, TORPEDO_ARM_BELOW};
use skirmish_core::enums::CameraModel;
use skirmish_sim::engine::SimConfig;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Target frame rate of the game loop
    pub fps: f64,
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    pub log_level: String,
    /// Log destination; logging is off without one since the terminal
    /// belongs to the renderer
    pub log_file: Option<PathBuf>,
    /// Fixed RNG seed; a fresh one is drawn per run when unset
    pub seed: Option<u64>,
    /// Chasers spawned around each ship
    pub chasers_per_ship: usize,
    /// Keep the view centred between the ships
    pub follow_camera: bool,
    /// Move the camera without easing
    pub direct_camera: bool,
    /// Stars on black instead of waves on blue
    pub space_theme: bool,
    /// Remaining torpedo life below which torpedoes detonate
    pub torpedo_arm_below: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: FRAME_RATE,
            log_level: "info".to_string(),
            log_file: None,
            seed: None,
            chasers_per_ship: 0,
            follow_camera: false,
            direct_camera: false,
            space_theme: false,
            torpedo_arm_below: TORPEDO_ARM_BELOW,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fps = number(&lookup, "SKIRMISH_FPS")?.unwrap_or(defaults.fps);
        if !(fps > 0.0 && fps.is_finite()) {
            return Err(ConfigError::FrameRate(fps));
        }

        Ok(Self {
            fps,
            log_level: lookup("SKIRMISH_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: lookup("SKIRMISH_LOG_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            seed: number(&lookup, "SKIRMISH_SEED")?,
            chasers_per_ship: number(&lookup, "SKIRMISH_CHASERS")?
                .unwrap_or(defaults.chasers_per_ship),
            follow_camera: flag(&lookup, "SKIRMISH_FOLLOW_CAMERA")?
                .unwrap_or(defaults.follow_camera),
            direct_camera: flag(&lookup, "SKIRMISH_DIRECT_CAMERA")?
                .unwrap_or(defaults.direct_camera),
            space_theme: flag(&lookup, "SKIRMISH_SPACE")?.unwrap_or(defaults.space_theme),
            torpedo_arm_below: number(&lookup, "SKIRMISH_TORPEDO_ARM")?
                .unwrap_or(defaults.torpedo_arm_below),
        })
    }

    /// Simulation settings for a field of `columns × rows` cells.
    pub fn sim_config(&self, columns: u16, rows: u16) -> SimConfig {
        SimConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            columns: columns as u32,
            rows: rows as u32,
            chasers_per_ship: self.chasers_per_ship,
            torpedo_arm_below: self.torpedo_arm_below,
            follow_camera: self.follow_camera,
            camera_model: if self.direct_camera {
                CameraModel::Direct
            } else {
                CameraModel::Inertial
            },
            space_theme: self.space_theme,
        }
    }
}

fn number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("Frame rate must be positive, got {0}")]
    FrameRate(f64),
}
