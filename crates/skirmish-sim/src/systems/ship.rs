//! Ship update: throttle, movement, firing, turning and ramming.

use hecs::Entity;
use tracing::{debug, info};

use skirmish_core::components::{Hull, Ship, Torpedo};
use skirmish_core::constants::*;
use skirmish_core::controls::ShipControls;
use skirmish_core::enums::EntityKind;
use skirmish_core::events::CombatEvent;
use skirmish_core::geometry::direction;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use super::{hulls_touching, Pass};
use crate::explosion::explode;
use crate::registry::Placement;

/// A torpedo about to leave the tube.
struct Launch {
    position: Vector,
    velocity: Vector,
    thrust: Vector,
    slot: usize,
    ammo_left: u32,
}

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let torus = pass.torus;
    let Ok((ship, hull, body, controls)) = pass.registry.world_mut().query_one_mut::<(
        &mut Ship,
        &mut Hull,
        &mut InertialBody,
        &ShipControls,
    )>(id) else {
        return;
    };
    let controls = *controls;

    throttle(ship, hull, &controls);
    hull.flash_for = (hull.flash_for - dt).max(0.0);

    let heading = direction(ship.facing, HEADINGS);
    body.update(dt, heading * SHIP_SPEED_SCALE * ship.speed as f64, &torus);

    let launch = if controls.fire && ship.ammo > 0 {
        ship.ammo -= 1;
        let (ox, oy) = MUZZLE_OFFSETS[ship.facing as usize % MUZZLE_OFFSETS.len()];
        let muzzle = Vector::new(ox as f64 + 0.5, 2.0 * oy as f64 + 0.5);
        Some(Launch {
            position: torus.wrap(body.position + muzzle),
            velocity: body.velocity,
            thrust: heading * TORPEDO_THRUST,
            slot: ship.slot,
            ammo_left: ship.ammo,
        })
    } else {
        None
    };

    ship.facing = (ship.facing as i32 + controls.turn_rate()).rem_euclid(HEADINGS as i32) as u32;
    let position = body.position;

    if let Some(launch) = launch {
        fire(pass, id, launch);
    }
    ram(pass, id, position);
}

/// Apply thrust and brake to the throttle counter.
pub(crate) fn throttle(ship: &mut Ship, hull: &Hull, controls: &ShipControls) {
    if hull.disabled() {
        ship.speed = 0;
        return;
    }
    if controls.thrust {
        ship.speed += 1;
    } else if controls.brake && ship.speed > 0 {
        ship.speed -= 1;
    }
    ship.speed = ship.speed.clamp(0, hull.top_speed);
}

fn fire(pass: &mut Pass, firer: Entity, launch: Launch) {
    pass.registry.spawn(
        (
            EntityKind::Torpedo,
            InertialBody::with_half_life(launch.position, launch.velocity, DEFAULT_HALF_LIFE),
            Torpedo {
                thrust: launch.thrust,
                time_left: TORPEDO_LIFETIME,
                firer: Some(firer),
            },
        ),
        Placement::Back,
    );
    debug!(slot = launch.slot, ammo_left = launch.ammo_left, "torpedo away");
    pass.events.push(CombatEvent::TorpedoFired {
        slot: launch.slot,
        ammo_left: launch.ammo_left,
    });
}

/// Collide with the first other hull sharing this ship's neighbourhood.
/// Both go, and the wreck throws out a large burst.
fn ram(pass: &mut Pass, id: Entity, position: Vector) {
    let other = hulls_touching(pass.registry, &pass.torus, position)
        .into_iter()
        .find(|&(e, _)| e != id);
    let Some((other, other_kind)) = other else {
        return;
    };

    pass.registry.despawn(other);
    pass.registry.despawn(id);
    explode(
        pass.registry,
        pass.rng,
        position,
        Vector::ZERO,
        RAM_BURST_PARTICLES,
        RAM_BURST_SPEED,
    );
    info!(?other_kind, x = position.x, y = position.y, "ship rammed");
    pass.events.push(CombatEvent::Rammed { other: other_kind });
}
