//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Players};

/// Notable things that happened during a pass, drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A match was set up.
    MatchStarted { players: Players, seed: u64 },
    /// A ship launched a torpedo.
    TorpedoFired { slot: usize, ammo_left: u32 },
    /// A torpedo ran out of time and its ammunition went home.
    TorpedoExpired,
    /// A torpedo struck a hull that survived.
    Hit { kind: EntityKind, top_speed: i32 },
    /// A torpedo hit disabled and removed a hull.
    Destroyed { kind: EntityKind },
    /// A ship collided with another hull; both are gone.
    Rammed { other: EntityKind },
}
