//! Explosion generator.

use rand::Rng;

use skirmish_core::components::Particle;
use skirmish_core::constants::DEFAULT_HALF_LIFE;
use skirmish_core::enums::EntityKind;
use skirmish_core::geometry::heading_vector;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use crate::registry::{Placement, Registry};

/// Throw `count` sparks out of `position`.
///
/// Each spark starts at `base + (unit direction at a uniform angle + jitter
/// in [-1, 1)²) × speed` and then coasts to rest under drag. Sparks join the
/// front of the registry so they draw beneath everything else.
pub fn explode(
    registry: &mut Registry,
    rng: &mut impl Rng,
    position: Vector,
    base: Vector,
    count: usize,
    speed: f64,
) {
    for _ in 0..count {
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let jitter = Vector::new(rng.gen::<f64>() * 2.0 - 1.0, rng.gen::<f64>() * 2.0 - 1.0);
        let velocity = base + (heading_vector(angle) + jitter) * speed;
        registry.spawn(
            (
                EntityKind::Particle,
                InertialBody::with_half_life(position, velocity, DEFAULT_HALF_LIFE),
                Particle::spark(),
            ),
            Placement::Front,
        );
    }
}
