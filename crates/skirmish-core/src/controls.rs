//! Per-ship control state and per-tick input.

use serde::{Deserialize, Serialize};

use crate::enums::Players;

/// Level-triggered control state of one ship for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipControls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub brake: bool,
    pub fire: bool,
}

impl ShipControls {
    /// Heading change for this tick. Right wins when both turns are held.
    pub fn turn_rate(&self) -> i32 {
        if self.turn_right {
            1
        } else if self.turn_left {
            -1
        } else {
            0
        }
    }

    /// Union of two control states.
    pub fn merge(&mut self, other: ShipControls) {
        self.turn_left |= other.turn_left;
        self.turn_right |= other.turn_right;
        self.thrust |= other.thrust;
        self.brake |= other.brake;
        self.fire |= other.fire;
    }
}

/// Everything the input source hands the engine for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Controls for ship slots 0 and 1.
    pub slots: [ShipControls; 2],
    /// Start a fresh match with this many human players.
    pub new_game: Option<Players>,
    /// Leave the program.
    pub quit: bool,
}
