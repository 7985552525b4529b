//! Entity spawn factories for setting up a match.

use hecs::{Entity, EntityBuilder};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::controls::ShipControls;
use skirmish_core::enums::{EntityKind, Players};
use skirmish_core::geometry::{heading_vector, Torus};
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use crate::registry::{Placement, Registry};
use crate::systems::swell::random_cell;

/// Build a fresh match in an empty registry and return the ship in each slot.
///
/// Order matters: swells first so they draw underneath, then ship 1, then
/// either a second human ship or an autopilot followed by the ship it flies.
pub fn setup_match(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    torus: &Torus,
    players: Players,
    chasers_per_ship: usize,
) -> [Option<Entity>; 2] {
    spawn_swells(registry, rng, torus, SWELL_COUNT);

    let first = spawn_ship(
        registry,
        rng,
        torus.wrap(Vector::new(FIRST_SPAWN.0, FIRST_SPAWN.1)),
        0,
        true,
    );

    let second_at = torus.wrap(Vector::new(
        torus.width() - SECOND_SPAWN_INSET,
        torus.height() - SECOND_SPAWN_INSET,
    ));
    let second = match players {
        Players::Two => spawn_ship(registry, rng, second_at, 1, true),
        Players::One => {
            let pilot = registry.spawn(
                (
                    EntityKind::Autopilot,
                    Autopilot {
                        ship: None,
                        target: Some(first),
                        memory: PilotMemory::default(),
                    },
                ),
                Placement::Back,
            );
            let ship = spawn_ship(registry, rng, second_at, 1, false);
            if let Ok(mut autopilot) = registry.world().get::<&mut Autopilot>(pilot) {
                autopilot.ship = Some(ship);
            }
            ship
        }
    };

    for ship in [first, second] {
        for _ in 0..chasers_per_ship {
            spawn_chaser(registry, rng, torus, ship);
        }
    }

    [Some(first), Some(second)]
}

/// Spawn a ship at rest with a random facing.
pub fn spawn_ship(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    position: Vector,
    slot: usize,
    human: bool,
) -> Entity {
    let ship = Ship {
        facing: rng.gen_range(0..HEADINGS),
        speed: 0,
        ammo: SHIP_AMMO,
        symbol: SHIP_SYMBOLS[slot % SHIP_SYMBOLS.len()],
        slot,
    };
    let mut builder = EntityBuilder::new();
    builder.add_bundle((
        EntityKind::Ship,
        InertialBody::at_rest(position),
        ship,
        Hull::new(SHIP_TOP_SPEED),
        ShipControls::default(),
    ));
    if human {
        builder.add(HumanPilot);
    }
    registry.spawn(builder.build(), Placement::Back)
}

/// Spawn a chaser a short hop from `target` in a random direction.
pub fn spawn_chaser(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    torus: &Torus,
    target: Entity,
) -> Option<Entity> {
    let anchor = registry.world().get::<&InertialBody>(target).ok()?.position;
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let position = anchor + heading_vector(angle) * CHASER_SPAWN_RADIUS;
    Some(registry.spawn(
        (
            EntityKind::Chaser,
            InertialBody::at_rest(torus.wrap(position)),
            Hull::new(CHASER_TOP_SPEED),
            Chaser {
                target: Some(target),
            },
        ),
        Placement::Back,
    ))
}

pub fn spawn_swells(registry: &mut Registry, rng: &mut ChaCha8Rng, torus: &Torus, count: usize) {
    for _ in 0..count {
        let cell = random_cell(rng, torus);
        registry.spawn((EntityKind::Swell, cell), Placement::Back);
    }
}
