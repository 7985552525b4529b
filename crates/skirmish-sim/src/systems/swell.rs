//! Background swell update.

use hecs::Entity;
use rand::Rng;

use skirmish_core::components::Swell;
use skirmish_core::constants::SWELL_MEAN_DWELL;
use skirmish_core::geometry::Torus;

use super::Pass;

pub fn update(pass: &mut Pass, id: Entity, dt: f64) {
    let relocate = SWELL_MEAN_DWELL * pass.rng.gen::<f64>() < dt;
    if !relocate {
        return;
    }
    let cell = random_cell(pass.rng, &pass.torus);
    if let Ok(mut swell) = pass.registry.world().get::<&mut Swell>(id) {
        *swell = cell;
    }
}

/// A swell at a uniformly random grid cell.
pub fn random_cell(rng: &mut impl Rng, torus: &Torus) -> Swell {
    Swell {
        column: rng.gen_range(0..torus.columns),
        row: rng.gen_range(0..torus.rows),
    }
}
