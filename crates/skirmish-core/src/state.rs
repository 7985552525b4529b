//! View types handed from the simulation to the renderer.

use serde::{Deserialize, Serialize};

use crate::enums::{MatchPhase, Palette};
use crate::events::CombatEvent;
use crate::types::{SimTime, Vector};

/// One character to draw, in world columns and grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub x: f64,
    pub row: f64,
    pub symbol: char,
    pub bold: bool,
    pub color: Palette,
}

/// HUD-relevant state of one ship slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStatus {
    pub slot: usize,
    pub symbol: char,
    pub speed: i32,
    pub top_speed: i32,
    pub ammo: u32,
    /// The ship is gone or its hull is disabled.
    pub destroyed: bool,
}

/// Everything the frontend needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// Camera centre in grid units.
    pub camera: Vector,
    /// Draw calls in registry order.
    pub sprites: Vec<Sprite>,
    /// Status of ship slots 0 and 1.
    pub status: Vec<ShipStatus>,
    pub events: Vec<CombatEvent>,
    pub entity_count: usize,
}
