//! Spark update.

use hecs::Entity;

use skirmish_core::components::Particle;
use skirmish_core::constants::FADE_EPSILON;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use super::Pass;

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let torus = pass.torus;
    let Ok((particle, body)) = pass
        .registry
        .world_mut()
        .query_one_mut::<(&mut Particle, &mut InertialBody)>(id)
    else {
        return;
    };

    body.update(dt, Vector::ZERO, &torus);
    if !burn(particle, dt) {
        pass.registry.despawn(id);
    }
}

/// Spend `dt` of the fade. Overshoot past the end of a phase is carried into
/// the next one, so the total lifetime does not depend on the step size.
/// Returns false once the last phase is spent.
pub fn burn(particle: &mut Particle, dt: f64) -> bool {
    let Some(current) = particle.fade.front_mut() else {
        return false;
    };
    current.remaining -= dt;

    while let Some(current) = particle.fade.front() {
        if current.remaining > FADE_EPSILON {
            return true;
        }
        let overshoot = current.remaining;
        particle.fade.pop_front();
        match particle.fade.front_mut() {
            Some(next) => next.remaining += overshoot,
            None => return false,
        }
    }
    false
}
