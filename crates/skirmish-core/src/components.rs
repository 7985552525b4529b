//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in the simulation
//! systems, not here. Handles to other entities are non-owning: the entity
//! they name may already be gone, so every use is a lookup that can miss.

use std::collections::VecDeque;

use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::constants::{FADE_SEQUENCE, HIT_FLASH_SECS};
use crate::enums::Palette;
use crate::types::Vector;

/// A player-steerable ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Heading index in `[0, HEADINGS)`.
    pub facing: u32,
    /// Throttle counter in `[0, top_speed]`.
    pub speed: i32,
    /// Torpedoes in the magazine.
    pub ammo: u32,
    pub symbol: char,
    /// HUD slot and input slot (0 or 1).
    pub slot: usize,
}

/// Damage state shared by everything a torpedo can hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    /// Remaining throttle steps; at or below zero the hull is disabled.
    pub top_speed: i32,
    /// Seconds of hit flash left.
    pub flash_for: f64,
}

impl Hull {
    pub fn new(top_speed: i32) -> Self {
        Self {
            top_speed,
            flash_for: 0.0,
        }
    }

    pub fn disabled(&self) -> bool {
        self.top_speed <= 0
    }

    /// Take one torpedo hit. Returns true when the hull is now disabled.
    pub fn take_hit(&mut self) -> bool {
        self.top_speed -= 1;
        self.flash_for = HIT_FLASH_SECS;
        self.disabled()
    }
}

/// A powered torpedo.
#[derive(Debug, Clone)]
pub struct Torpedo {
    /// Commanded velocity along the launch heading.
    pub thrust: Vector,
    /// Seconds until the torpedo expires.
    pub time_left: f64,
    /// Ship that fired it; ammunition goes back there on expiry.
    pub firer: Option<Entity>,
}

/// One color phase of a particle's fade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadePhase {
    pub color: Palette,
    pub remaining: f64,
}

/// An explosion spark working through its fade stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub fade: VecDeque<FadePhase>,
}

impl Particle {
    /// A spark with the standard explosion fade.
    pub fn spark() -> Self {
        Self {
            fade: FADE_SEQUENCE
                .iter()
                .map(|&(color, remaining)| FadePhase { color, remaining })
                .collect(),
        }
    }

    /// Color of the current phase, if the particle has not burnt out.
    pub fn color(&self) -> Option<Palette> {
        self.fade.front().map(|phase| phase.color)
    }

    /// Total fade time left.
    pub fn remaining(&self) -> f64 {
        self.fade.iter().map(|phase| phase.remaining).sum()
    }
}

/// A pursuit drone homing on a ship.
#[derive(Debug, Clone, Copy)]
pub struct Chaser {
    pub target: Option<Entity>,
}

/// Timing state of the autopilot between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotMemory {
    /// Elapsed time not yet spent on decision steps.
    pub backlog: f64,
    /// Seconds since the autopilot last asserted a turn.
    pub since_last_turn: f64,
    /// Direction of the last asserted turn: -1, 0 or +1.
    pub last_turn: i8,
}

/// Computer pilot flying one ship against another.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub ship: Option<Entity>,
    pub target: Option<Entity>,
    pub memory: PilotMemory,
}

/// Decorative background glyph at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swell {
    pub column: u32,
    pub row: u32,
}

/// Marks a ship whose controls are copied from keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanPilot;
