//! Autopilot update: decides the controls of its ship for this pass.
//!
//! The autopilot sits ahead of its ship in registry order, so the ship acts
//! on these controls in the same pass.

use hecs::Entity;

use skirmish_ai::pilot::{self, PilotContext};
use skirmish_core::components::{Autopilot, Hull, Ship};
use skirmish_core::constants::HEADINGS;
use skirmish_core::controls::ShipControls;
use skirmish_core::geometry::direction;
use skirmish_core::motion::InertialBody;

use super::Pass;

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let torus = pass.torus;
    let world = pass.registry.world();
    let Ok(autopilot) = world.get::<&Autopilot>(id).map(|a| *a) else {
        return;
    };
    // Without a ship the autopilot has nothing to fly.
    let Some(ship_id) = autopilot.ship else {
        return;
    };
    let Ok(mut query) = world.query_one::<(&Ship, &Hull, &InertialBody)>(ship_id) else {
        return;
    };
    let Some((ship, hull, body)) = query.get() else {
        return;
    };
    let ctx = PilotContext {
        heading: direction(ship.facing, HEADINGS),
        offset_to_target: autopilot
            .target
            .and_then(|t| world.get::<&InertialBody>(t).ok().map(|b| b.position))
            .map(|target| torus.offset(body.position, target)),
        speed: ship.speed,
        top_speed: hull.top_speed,
    };
    drop(query);

    let mut memory = autopilot.memory;
    let controls = pilot::drive(&mut memory, &ctx, dt);

    let world = pass.registry.world_mut();
    if let Ok(mut state) = world.get::<&mut Autopilot>(id) {
        state.memory = memory;
    }
    if let Ok(mut helm) = world.get::<&mut ShipControls>(ship_id) {
        *helm = controls;
    }
}
