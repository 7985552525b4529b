//! Chaser update.

use hecs::Entity;

use skirmish_ai::pursuit;
use skirmish_core::components::Chaser;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use super::Pass;

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let torus = pass.torus;
    let world = pass.registry.world();
    let Ok(chaser) = world.get::<&Chaser>(id).map(|c| *c) else {
        return;
    };
    let Ok(position) = world.get::<&InertialBody>(id).map(|b| b.position) else {
        return;
    };
    let target = chaser
        .target
        .and_then(|t| world.get::<&InertialBody>(t).ok().map(|b| b.position));

    // With its target gone the chaser coasts to rest.
    let velocity = match target {
        Some(target) => pursuit::steer(torus.offset(position, target)),
        None => Vector::ZERO,
    };

    if let Ok(mut body) = pass.registry.world().get::<&mut InertialBody>(id) {
        body.update(dt, velocity, &torus);
    }
}
