//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Color roles understood by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    /// Status bar text.
    #[default]
    Hud,
    /// Hulls, fresh sparks, chasers.
    Bright,
    /// Background swells.
    Sea,
    /// Torpedoes, flashing hulls, cooling sparks.
    Ember,
    /// Hot sparks.
    Flame,
    /// Dying sparks.
    Smoke,
}

/// Kind tag carried by every entity, used to dispatch its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Torpedo,
    Particle,
    Chaser,
    Autopilot,
    Swell,
}

/// Number of human players in a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Players {
    /// One human against the autopilot.
    #[default]
    One,
    /// Two humans sharing the keyboard.
    Two,
}

impl Players {
    pub fn count(self) -> usize {
        match self {
            Players::One => 1,
            Players::Two => 2,
        }
    }
}

/// Lifecycle of the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match has been started yet; the field is empty.
    #[default]
    Idle,
    /// A match is in progress.
    Running,
}

/// Motion model used by the follow camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraModel {
    /// Eases toward the midpoint under drag.
    #[default]
    Inertial,
    /// Moves at the commanded velocity with no drag.
    Direct,
}
