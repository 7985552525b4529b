//! Torpedo update: powered flight, detonation and expiry.

use hecs::Entity;
use tracing::{debug, info};

use skirmish_core::components::{Hull, Ship, Torpedo};
use skirmish_core::constants::*;
use skirmish_core::events::CombatEvent;
use skirmish_core::motion::InertialBody;

use super::{hulls_touching, Pass};
use crate::explosion::explode;

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let torus = pass.torus;
    let Ok((torpedo, body)) = pass
        .registry
        .world_mut()
        .query_one_mut::<(&mut Torpedo, &mut InertialBody)>(id)
    else {
        return;
    };

    body.update(dt, torpedo.thrust, &torus);
    torpedo.time_left -= dt;
    let armed = torpedo.time_left < pass.torpedo_arm_below;
    let expired = torpedo.time_left < 0.0;
    let firer = torpedo.firer;
    let position = body.position;

    let mut impact = false;
    if armed {
        for (target, kind) in hulls_touching(pass.registry, &torus, position) {
            let world = pass.registry.world_mut();
            let Ok((hull, target_body)) = world.query_one_mut::<(&mut Hull, &InertialBody)>(target)
            else {
                continue;
            };
            impact = true;
            let destroyed = hull.take_hit();
            let top_speed = hull.top_speed;
            let debris = target_body.velocity * DEBRIS_VELOCITY_SHARE;

            let size = if destroyed {
                pass.registry.despawn(target);
                info!(?kind, "hull destroyed by torpedo");
                pass.events.push(CombatEvent::Destroyed { kind });
                KILL_PARTICLES
            } else {
                debug!(?kind, top_speed, "torpedo hit");
                pass.events.push(CombatEvent::Hit { kind, top_speed });
                HIT_PARTICLES
            };
            explode(pass.registry, pass.rng, position, debris, size, EXPLOSION_SPEED);
        }
    }

    if impact {
        pass.registry.despawn(id);
    } else if expired {
        pass.registry.despawn(id);
        if let Some(mut ship) = firer.and_then(|f| pass.registry.world().get::<&mut Ship>(f).ok()) {
            ship.ammo += 1;
        }
        debug!("torpedo expired");
        pass.events.push(CombatEvent::TorpedoExpired);
    }
}
