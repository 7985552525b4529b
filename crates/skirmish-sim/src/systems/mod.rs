//! Per-kind update systems.
//!
//! Each system updates a single entity for one pass. Systems hold no state
//! of their own; everything they touch is reached through [`Pass`].

pub mod autopilot;
pub mod chaser;
pub mod hud;
pub mod particle;
pub mod render;
pub mod ship;
pub mod swell;
pub mod torpedo;

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::Hull;
use skirmish_core::enums::EntityKind;
use skirmish_core::events::CombatEvent;
use skirmish_core::geometry::Torus;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use crate::registry::Registry;

/// Mutable context shared by every entity update in one pass.
pub struct Pass<'a> {
    pub registry: &'a mut Registry,
    pub torus: Torus,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<CombatEvent>,
    /// Torpedoes detonate once their remaining life drops below this.
    pub torpedo_arm_below: f64,
}

/// Live hull-bearing entities whose cell touches the cell of `at`, in
/// registry order.
pub(crate) fn hulls_touching(
    registry: &Registry,
    torus: &Torus,
    at: Vector,
) -> Vec<(Entity, EntityKind)> {
    let world = registry.world();
    registry
        .live_in_order()
        .into_iter()
        .filter(|&e| world.get::<&Hull>(e).is_ok())
        .filter_map(|e| {
            let position = world.get::<&InertialBody>(e).ok()?.position;
            let kind = *world.get::<&EntityKind>(e).ok()?;
            torus.cells_touch(position, at).then_some((e, kind))
        })
        .collect()
}
