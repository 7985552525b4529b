//! Tests for the simulation engine, entity systems and registry.

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::controls::{ShipControls, TickInput};
use skirmish_core::enums::*;
use skirmish_core::events::CombatEvent;
use skirmish_core::geometry::Torus;
use skirmish_core::motion::InertialBody;
use skirmish_core::types::Vector;

use crate::camera::{midpoint, Camera};
use crate::engine::{SimConfig, SimulationEngine};
use crate::explosion::explode;
use crate::registry::{Placement, Registry};
use crate::systems::particle::burn;
use crate::world_setup::spawn_ship;

fn engine(columns: u32, rows: u32) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed: 7,
        columns,
        rows,
        ..Default::default()
    })
}

fn idle() -> TickInput {
    TickInput::default()
}

fn helm(slot: usize, controls: ShipControls) -> TickInput {
    let mut input = TickInput::default();
    input.slots[slot] = controls;
    input
}

fn fire_and_thrust() -> ShipControls {
    ShipControls {
        thrust: true,
        fire: true,
        ..Default::default()
    }
}

fn torpedoes(engine: &SimulationEngine) -> Vec<(Entity, Torpedo, InertialBody)> {
    let world = engine.registry().world();
    let mut found: Vec<_> = world
        .query::<(&Torpedo, &InertialBody)>()
        .iter()
        .map(|(e, (t, b))| (e, t.clone(), *b))
        .collect();
    found.sort_by_key(|(e, _, _)| e.id());
    found
}

fn count_kind(engine: &SimulationEngine, kind: EntityKind) -> usize {
    engine
        .registry()
        .world()
        .query::<&EntityKind>()
        .iter()
        .filter(|(_, k)| **k == kind)
        .count()
}

fn ship_state(engine: &SimulationEngine, ship: Entity) -> (Ship, Hull, InertialBody) {
    let world = engine.registry().world();
    let s = (*world.get::<&Ship>(ship).unwrap()).clone();
    let h = *world.get::<&Hull>(ship).unwrap();
    let b = *world.get::<&InertialBody>(ship).unwrap();
    (s, h, b)
}

fn spawn_torpedo(
    engine: &mut SimulationEngine,
    at: Vector,
    firer: Entity,
    time_left: f64,
) -> Entity {
    let registry = engine.registry_mut();
    let torpedo = registry.spawn(
        (
            EntityKind::Torpedo,
            InertialBody::at_rest(at),
            Torpedo {
                thrust: Vector::ZERO,
                time_left,
                firer: Some(firer),
            },
        ),
        Placement::Back,
    );
    registry.commit();
    torpedo
}

// ---- Registry ----

#[test]
fn test_registry_despawn_idempotent() {
    let mut registry = Registry::new();
    let e = registry.spawn((EntityKind::Swell,), Placement::Back);
    registry.commit();
    assert!(registry.despawn(e));
    assert!(!registry.despawn(e));
    assert!(!registry.is_live(e));
    assert_eq!(registry.kind(e), None);
    registry.commit();
    assert!(registry.snapshot().is_empty());
}

#[test]
fn test_registry_spawns_join_order_at_commit() {
    let mut registry = Registry::new();
    let a = registry.spawn((EntityKind::Swell,), Placement::Back);
    let b = registry.spawn((EntityKind::Swell,), Placement::Back);
    registry.commit();

    let pass = registry.snapshot();
    let late = registry.spawn((EntityKind::Torpedo,), Placement::Back);
    let under = registry.spawn((EntityKind::Particle,), Placement::Front);
    assert_eq!(pass, vec![a, b]);
    assert_eq!(registry.snapshot(), vec![a, b]);
    assert!(registry.is_live(late));
    assert_eq!(registry.live_in_order(), vec![under, a, b, late]);

    registry.commit();
    assert_eq!(registry.snapshot(), vec![under, a, b, late]);
}

#[test]
fn test_registry_removed_entity_dropped_from_order() {
    let mut registry = Registry::new();
    let a = registry.spawn((EntityKind::Swell,), Placement::Back);
    let b = registry.spawn((EntityKind::Swell,), Placement::Back);
    let c = registry.spawn((EntityKind::Swell,), Placement::Back);
    registry.commit();
    registry.despawn(b);
    assert_eq!(registry.live_in_order(), vec![a, c]);
    registry.commit();
    assert_eq!(registry.snapshot(), vec![a, c]);
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.snapshot().is_empty());
}

// ---- Match lifecycle ----

#[test]
fn test_idle_field_before_new_game() {
    let mut engine = engine(80, 23);
    let snap = engine.tick(1.0 / 60.0, &idle());
    assert_eq!(snap.phase, MatchPhase::Idle);
    assert_eq!(snap.entity_count, 0);
    assert!(snap.sprites.is_empty());
    assert!(snap.status.iter().all(|s| s.destroyed));
    assert_eq!(snap.time.tick, 0);
}

#[test]
fn test_new_game_one_player() {
    let mut engine = engine(80, 23);
    let input = TickInput {
        new_game: Some(Players::One),
        ..Default::default()
    };
    let snap = engine.tick(1.0 / 60.0, &input);

    assert_eq!(snap.phase, MatchPhase::Running);
    assert_eq!(snap.entity_count, SWELL_COUNT + 3);
    assert_eq!(count_kind(&engine, EntityKind::Swell), SWELL_COUNT);
    assert_eq!(count_kind(&engine, EntityKind::Ship), 2);
    assert_eq!(count_kind(&engine, EntityKind::Autopilot), 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, CombatEvent::MatchStarted { players: Players::One, .. })));

    // The autopilot acts before the ship it flies.
    let order = engine.registry().snapshot();
    let second = engine.ship(1).unwrap();
    let pilot = order
        .iter()
        .position(|&e| engine.registry().kind(e) == Some(EntityKind::Autopilot))
        .unwrap();
    let ship = order.iter().position(|&e| e == second).unwrap();
    assert!(pilot < ship);

    let world = engine.registry().world();
    assert!(world.get::<&HumanPilot>(engine.ship(0).unwrap()).is_ok());
    assert!(world.get::<&HumanPilot>(second).is_err());
    let autopilot = *world.get::<&Autopilot>(order[pilot]).unwrap();
    assert_eq!(autopilot.ship, Some(second));
    assert_eq!(autopilot.target, engine.ship(0));

    assert_eq!(snap.status[0].symbol, 'a');
    assert_eq!(snap.status[1].symbol, 'p');
    assert_eq!(
        crate::systems::hud::slot_text(&snap.status[0]),
        "  -----  ***"
    );
}

#[test]
fn test_new_game_two_players_spawn_points() {
    let mut engine = engine(80, 23);
    let input = TickInput {
        new_game: Some(Players::Two),
        ..Default::default()
    };
    engine.tick(0.0, &input);
    assert_eq!(count_kind(&engine, EntityKind::Autopilot), 0);

    let (first, _, first_body) = ship_state(&engine, engine.ship(0).unwrap());
    let (second, _, second_body) = ship_state(&engine, engine.ship(1).unwrap());
    assert_eq!(first_body.position, Vector::new(30.0, 30.0));
    assert_eq!(second_body.position, Vector::new(50.0, 16.0));
    assert!(first.facing < HEADINGS && second.facing < HEADINGS);
    assert_eq!(first.ammo, SHIP_AMMO);
}

#[test]
fn test_new_game_resets_field() {
    let mut engine = engine(80, 23);
    let input = TickInput {
        new_game: Some(Players::Two),
        ..Default::default()
    };
    engine.tick(0.1, &input);
    engine.tick(0.1, &idle());
    let snap = engine.tick(0.1, &input);
    assert_eq!(snap.entity_count, SWELL_COUNT + 2);
    assert_eq!(snap.time.tick, 1);
}

#[test]
fn test_spawn_ship_pilot_marker() {
    let mut registry = Registry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let human = spawn_ship(&mut registry, &mut rng, Vector::new(10.0, 10.0), 0, true);
    let computer = spawn_ship(&mut registry, &mut rng, Vector::new(30.0, 10.0), 1, false);
    registry.commit();

    let world = registry.world();
    assert!(world.get::<&HumanPilot>(human).is_ok());
    assert!(world.get::<&HumanPilot>(computer).is_err());
    for ship in [human, computer] {
        assert!(world.get::<&Hull>(ship).is_ok());
        assert!(world.get::<&ShipControls>(ship).is_ok());
    }
    assert_eq!(world.get::<&Ship>(computer).unwrap().symbol, SHIP_SYMBOLS[1]);
    assert_eq!(registry.snapshot(), vec![human, computer]);
}

#[test]
fn test_chasers_spawn_per_ship() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 3,
        columns: 200,
        rows: 60,
        chasers_per_ship: 2,
        ..Default::default()
    });
    engine.start_match(Players::Two);
    assert_eq!(count_kind(&engine, EntityKind::Chaser), 4);
}

// ---- Ship ----

#[test]
fn test_fire_scenario() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let dt = 0.1;
    let snap = engine.tick(dt, &helm(0, fire_and_thrust()));

    let (state, _, body) = ship_state(&engine, ship);
    assert_eq!(state.ammo, SHIP_AMMO - 1);
    assert_eq!(state.speed, 1);

    let fired = torpedoes(&engine);
    assert_eq!(fired.len(), 1);
    let (_, torpedo, torpedo_body) = &fired[0];
    let muzzle = body.position + Vector::new(2.5, 0.5);
    assert!((torpedo_body.position - muzzle).length() < 1e-9);
    assert_eq!(torpedo_body.velocity, body.velocity);
    assert!(body.velocity.x > 0.0);
    assert!((torpedo.thrust - Vector::new(TORPEDO_THRUST, 0.0)).length() < 1e-9);
    assert_eq!(torpedo.time_left, TORPEDO_LIFETIME);
    assert_eq!(torpedo.firer, Some(ship));
    assert!(snap
        .events
        .contains(&CombatEvent::TorpedoFired { slot: 0, ammo_left: 2 }));
}

#[test]
fn test_no_fire_without_ammo() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    engine
        .registry_mut()
        .world_mut()
        .get::<&mut Ship>(ship)
        .unwrap()
        .ammo = 0;
    engine.tick(0.1, &helm(0, fire_and_thrust()));
    assert!(torpedoes(&engine).is_empty());
    assert_eq!(ship_state(&engine, ship).0.ammo, 0);
}

#[test]
fn test_torpedo_expiry_returns_ammo() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    engine.tick(0.1, &helm(0, fire_and_thrust()));
    assert_eq!(ship_state(&engine, ship).0.ammo, 2);

    for _ in 0..12 {
        engine.tick(0.1, &idle());
    }
    assert_eq!(torpedoes(&engine).len(), 1);

    let snap = engine.tick(0.1, &idle());
    assert!(torpedoes(&engine).is_empty());
    assert_eq!(ship_state(&engine, ship).0.ammo, SHIP_AMMO);
    assert!(snap.events.contains(&CombatEvent::TorpedoExpired));
}

#[test]
fn test_torpedo_armed_after_short_flight() {
    let mut engine = engine(400, 50);
    let shooter = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let target = engine.spawn_test_ship(1, Vector::new(200.0, 60.0), 0);
    let torpedo = spawn_torpedo(&mut engine, Vector::new(200.5, 60.5), shooter, TORPEDO_LIFETIME);

    // 1.25 - 0.2 = 1.05 remaining, under the arming threshold.
    let snap = engine.tick(0.2, &idle());
    assert!(!engine.registry().is_live(torpedo));
    assert_eq!(ship_state(&engine, target).1.top_speed, SHIP_TOP_SPEED - 1);
    assert!(snap.events.contains(&CombatEvent::Hit {
        kind: EntityKind::Ship,
        top_speed: SHIP_TOP_SPEED - 1,
    }));
}

#[test]
fn test_torpedo_outlives_its_firer() {
    let mut engine = engine(400, 50);
    let firer = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let bystander = engine.spawn_test_ship(1, Vector::new(40.0, 80.0), 0);
    engine.tick(0.1, &helm(0, fire_and_thrust()));
    assert_eq!(torpedoes(&engine).len(), 1);
    assert!(engine.registry_mut().despawn(firer));

    let mut expired = false;
    for _ in 0..20 {
        let snap = engine.tick(0.1, &idle());
        expired |= snap.events.contains(&CombatEvent::TorpedoExpired);
    }
    assert!(expired);
    assert!(torpedoes(&engine).is_empty());
    assert!(!engine.registry().is_live(firer));
    assert_eq!(engine.ship(0), None);
    assert_eq!(ship_state(&engine, bystander).0.ammo, SHIP_AMMO);
}

#[test]
fn test_torpedo_impact_keeps_ammo() {
    let mut engine = engine(400, 50);
    let shooter = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let target = engine.spawn_test_ship(1, Vector::new(200.0, 60.0), 0);
    engine
        .registry_mut()
        .world_mut()
        .get::<&mut Ship>(shooter)
        .unwrap()
        .ammo = 2;
    let torpedo = spawn_torpedo(&mut engine, Vector::new(200.5, 60.5), shooter, 1.0);

    let snap = engine.tick(0.1, &idle());
    assert!(!engine.registry().is_live(torpedo));
    assert_eq!(ship_state(&engine, shooter).0.ammo, 2);

    let (_, hull, _) = ship_state(&engine, target);
    assert_eq!(hull.top_speed, SHIP_TOP_SPEED - 1);
    assert_eq!(hull.flash_for, HIT_FLASH_SECS);
    assert_eq!(count_kind(&engine, EntityKind::Particle), HIT_PARTICLES);
    assert!(snap.events.contains(&CombatEvent::Hit {
        kind: EntityKind::Ship,
        top_speed: SHIP_TOP_SPEED - 1,
    }));
    assert_eq!(snap.status[1].top_speed, SHIP_TOP_SPEED - 1);
}

#[test]
fn test_unarmed_torpedo_passes_through() {
    let mut engine = engine(400, 50);
    let shooter = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let target = engine.spawn_test_ship(1, Vector::new(200.0, 60.0), 0);
    let torpedo = spawn_torpedo(&mut engine, Vector::new(200.5, 60.5), shooter, TORPEDO_LIFETIME);
    engine.tick(0.05, &idle());
    assert!(engine.registry().is_live(torpedo));
    assert_eq!(ship_state(&engine, target).1.top_speed, SHIP_TOP_SPEED);
}

#[test]
fn test_repeated_hits_destroy_ship() {
    let mut engine = engine(400, 50);
    let shooter = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let target = engine.spawn_test_ship(1, Vector::new(200.0, 60.0), 0);
    let at = Vector::new(200.5, 60.5);

    for hit in 1..SHIP_TOP_SPEED {
        spawn_torpedo(&mut engine, at, shooter, 1.0);
        engine.tick(0.01, &idle());
        assert_eq!(ship_state(&engine, target).1.top_speed, SHIP_TOP_SPEED - hit);
    }
    let before = count_kind(&engine, EntityKind::Particle);
    assert_eq!(before, (SHIP_TOP_SPEED as usize - 1) * HIT_PARTICLES);

    spawn_torpedo(&mut engine, at, shooter, 1.0);
    let snap = engine.tick(0.01, &idle());

    assert!(!engine.registry().is_live(target));
    assert_eq!(engine.ship(1), None);
    assert!(snap.status[1].destroyed);
    assert_eq!(count_kind(&engine, EntityKind::Particle), before + KILL_PARTICLES);
    assert!(snap.events.contains(&CombatEvent::Destroyed {
        kind: EntityKind::Ship
    }));
    assert_eq!(
        crate::systems::hud::slot_text(&snap.status[1]),
        HUD_DISABLED
    );
}

#[test]
fn test_kill_explosion_at_torpedo_position() {
    let mut engine = engine(400, 50);
    let shooter = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 2);
    let target = engine.spawn_test_ship(1, Vector::new(200.0, 60.0), 0);
    engine
        .registry_mut()
        .world_mut()
        .get::<&mut Hull>(target)
        .unwrap()
        .top_speed = 1;
    let at = Vector::new(201.2, 61.7);
    spawn_torpedo(&mut engine, at, shooter, 1.0);
    engine.tick(0.1, &idle());

    assert!(!engine.registry().is_live(target));
    let world = engine.registry().world();
    let sparks: Vec<Vector> = world
        .query::<(&Particle, &InertialBody)>()
        .iter()
        .map(|(_, (_, b))| b.position)
        .collect();
    assert_eq!(sparks.len(), KILL_PARTICLES);
    assert!(sparks.iter().all(|&p| (p - at).length() < 1e-9));
}

#[test]
fn test_ram_across_wrap_edge() {
    let mut engine = engine(80, 24);
    let a = engine.spawn_test_ship(0, Vector::new(0.5, 10.5), 0);
    let b = engine.spawn_test_ship(1, Vector::new(79.5, 10.5), 0);
    let snap = engine.tick(0.01, &idle());

    assert!(!engine.registry().is_live(a));
    assert!(!engine.registry().is_live(b));
    assert!(snap.status.iter().all(|s| s.destroyed));
    assert_eq!(snap.entity_count, RAM_BURST_PARTICLES);
    assert!(snap.events.contains(&CombatEvent::Rammed {
        other: EntityKind::Ship
    }));
}

#[test]
fn test_ships_two_cells_apart_do_not_ram() {
    let mut engine = engine(80, 24);
    let a = engine.spawn_test_ship(0, Vector::new(10.5, 10.5), 0);
    let b = engine.spawn_test_ship(1, Vector::new(12.5, 10.5), 0);
    engine.tick(0.01, &idle());
    assert!(engine.registry().is_live(a));
    assert!(engine.registry().is_live(b));
}

#[test]
fn test_turn_right_wins() {
    let mut engine = engine(80, 24);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 0);
    let both = ShipControls {
        turn_left: true,
        turn_right: true,
        ..Default::default()
    };
    engine.tick(0.01, &helm(0, both));
    assert_eq!(ship_state(&engine, ship).0.facing, 1);

    let left = ShipControls {
        turn_left: true,
        ..Default::default()
    };
    engine.tick(0.01, &helm(0, left));
    engine.tick(0.01, &helm(0, left));
    assert_eq!(ship_state(&engine, ship).0.facing, HEADINGS - 1);
}

#[test]
fn test_throttle_and_brake() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 0);
    let thrust = ShipControls {
        thrust: true,
        ..Default::default()
    };
    for _ in 0..8 {
        engine.tick(0.01, &helm(0, thrust));
    }
    assert_eq!(ship_state(&engine, ship).0.speed, SHIP_TOP_SPEED);

    let both = ShipControls {
        thrust: true,
        brake: true,
        ..Default::default()
    };
    engine.tick(0.01, &helm(0, both));
    assert_eq!(ship_state(&engine, ship).0.speed, SHIP_TOP_SPEED);

    let brake = ShipControls {
        brake: true,
        ..Default::default()
    };
    for _ in 0..8 {
        engine.tick(0.01, &helm(0, brake));
    }
    assert_eq!(ship_state(&engine, ship).0.speed, 0);
}

#[test]
fn test_damaged_hull_caps_speed() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 0);
    {
        let world = engine.registry_mut().world_mut();
        world.get::<&mut Ship>(ship).unwrap().speed = 5;
        world.get::<&mut Hull>(ship).unwrap().top_speed = 3;
    }
    engine.tick(0.01, &idle());
    assert_eq!(ship_state(&engine, ship).0.speed, 3);

    engine
        .registry_mut()
        .world_mut()
        .get::<&mut Hull>(ship)
        .unwrap()
        .top_speed = 0;
    let thrust = ShipControls {
        thrust: true,
        ..Default::default()
    };
    let snap = engine.tick(0.01, &helm(0, thrust));
    assert_eq!(ship_state(&engine, ship).0.speed, 0);
    assert!(snap.status[0].destroyed);
}

#[test]
fn test_flash_decays() {
    let mut engine = engine(400, 50);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 0);
    engine
        .registry_mut()
        .world_mut()
        .get::<&mut Hull>(ship)
        .unwrap()
        .flash_for = 0.3;
    engine.tick(0.2, &idle());
    assert!((ship_state(&engine, ship).1.flash_for - 0.1).abs() < 1e-12);
    engine.tick(0.2, &idle());
    assert_eq!(ship_state(&engine, ship).1.flash_for, 0.0);
}

// ---- Particles ----

#[test]
fn test_particle_lifetime_single_step() {
    let mut spark = Particle::spark();
    assert!(!burn(&mut spark, 1.0));
    assert!(spark.fade.is_empty());
}

#[test]
fn test_particle_lifetime_fine_steps() {
    let mut spark = Particle::spark();
    for step in 0..39 {
        assert!(burn(&mut spark, 0.025), "burnt out early at step {step}");
    }
    assert_eq!(spark.color(), Some(Palette::Smoke));
    assert!(!burn(&mut spark, 0.025));
}

#[test]
fn test_particle_overshoot_carries() {
    let mut spark = Particle::spark();
    assert!(burn(&mut spark, 0.6));
    assert_eq!(spark.fade.len(), 2);
    assert_eq!(spark.color(), Some(Palette::Ember));
    assert!((spark.remaining() - 0.4).abs() < 1e-12);
}

#[test]
fn test_particles_removed_from_field() {
    let mut engine = engine(400, 50);
    engine.spawn_test_ship(0, Vector::new(40.0, 20.0), 0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    explode(
        engine.registry_mut(),
        &mut rng,
        Vector::new(300.0, 80.0),
        Vector::ZERO,
        5,
        EXPLOSION_SPEED,
    );
    engine.registry_mut().commit();
    assert_eq!(count_kind(&engine, EntityKind::Particle), 5);
    let snap = engine.tick(1.0, &idle());
    assert_eq!(count_kind(&engine, EntityKind::Particle), 0);
    assert_eq!(snap.entity_count, 1);
}

#[test]
fn test_explosion_velocity_spread() {
    let mut registry = Registry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let base = Vector::new(3.0, -1.0);
    explode(&mut registry, &mut rng, Vector::new(5.0, 5.0), base, 50, 8.0);
    registry.commit();
    let world = registry.world();
    let max_spread = 8.0 * (1.0 + 2f64.sqrt()) + 1e-9;
    let mut count = 0;
    for (_, (_, body)) in world.query::<(&Particle, &InertialBody)>().iter() {
        assert!((body.velocity - base).length() <= max_spread);
        count += 1;
    }
    assert_eq!(count, 50);
}

// ---- Computer control ----

#[test]
fn test_autopilot_opens_fire() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 99,
        columns: 200,
        rows: 60,
        ..Default::default()
    });
    engine.tick(
        0.0,
        &TickInput {
            new_game: Some(Players::One),
            ..Default::default()
        },
    );

    let dt = 1.0 / 60.0;
    let mut fired = false;
    for _ in 0..(60 * 10) {
        let snap = engine.tick(dt, &idle());
        if snap
            .events
            .iter()
            .any(|e| matches!(e, CombatEvent::TorpedoFired { slot: 1, .. }))
        {
            fired = true;
            break;
        }
    }
    assert!(fired, "autopilot never fired");
}

#[test]
fn test_autopilot_ignores_input() {
    let mut engine = engine(200, 60);
    engine.start_match(Players::One);
    let second = engine.ship(1).unwrap();
    let turn = ShipControls {
        turn_right: true,
        fire: true,
        ..Default::default()
    };
    // Below the autopilot's first decision the ship gets no controls at all.
    engine.tick(0.01, &helm(1, turn));
    let (ship, _, _) = ship_state(&engine, second);
    assert_eq!(ship.ammo, SHIP_AMMO);
}

#[test]
fn test_chaser_pursues_and_backs_off() {
    let mut engine = engine(200, 60);
    let ship = engine.spawn_test_ship(0, Vector::new(40.0, 40.0), 0);
    let spawn = |engine: &mut SimulationEngine, at: Vector| {
        let registry = engine.registry_mut();
        let chaser = registry.spawn(
            (
                EntityKind::Chaser,
                InertialBody::at_rest(at),
                Hull::new(CHASER_TOP_SPEED),
                Chaser { target: Some(ship) },
            ),
            Placement::Back,
        );
        registry.commit();
        chaser
    };
    let far = spawn(&mut engine, Vector::new(80.0, 40.0));
    let near = spawn(&mut engine, Vector::new(40.0, 43.0));

    engine.tick(0.1, &idle());
    let world = engine.registry().world();
    let far_body = *world.get::<&InertialBody>(far).unwrap();
    let near_body = *world.get::<&InertialBody>(near).unwrap();
    assert!(far_body.position.x < 80.0);
    assert!(far_body.velocity.x < 0.0);
    assert!(near_body.position.y > 43.0);
}

// ---- Camera ----

#[test]
fn test_camera_midpoint_wraps() {
    let torus = Torus::new(80, 24);
    let mid = midpoint(Vector::new(78.0, 10.0), Vector::new(2.0, 10.0), &torus);
    assert!((torus.wrap(mid) - Vector::new(0.0, 10.0)).length() < 1e-9);
}

#[test]
fn test_direct_camera_tracks_at_speed() {
    let torus = Torus::new(80, 24);
    let mut camera = Camera::new(CameraModel::Direct);
    camera.update(
        0.1,
        Some(Vector::new(78.0, 10.0)),
        Some(Vector::new(2.0, 10.0)),
        &torus,
    );
    assert!((camera.centre() - Vector::new(0.0, 2.5)).length() < 1e-9);

    camera.update(0.1, None, None, &torus);
    assert!((camera.centre() - Vector::new(0.0, 2.5)).length() < 1e-9);
}

#[test]
fn test_inertial_camera_lags() {
    let torus = Torus::new(80, 24);
    let mut camera = Camera::new(CameraModel::Inertial);
    camera.update(0.1, Some(Vector::new(0.0, 20.0)), None, &torus);
    let row = camera.centre().y;
    assert!(row > 0.0 && row < 2.5);
}

#[test]
fn test_follow_camera_in_snapshot() {
    let mut engine = SimulationEngine::new(SimConfig {
        columns: 80,
        rows: 24,
        follow_camera: true,
        ..Default::default()
    });
    let idle_snap = engine.tick(0.1, &idle());
    assert_eq!(idle_snap.camera, Vector::ZERO);
    engine.start_match(Players::Two);
    let snap = engine.tick(0.1, &idle());
    assert_ne!(snap.camera, Vector::ZERO);
}

// ---- Rendering ----

#[test]
fn test_ship_sprites() {
    let mut engine = engine(80, 24);
    engine.spawn_test_ship(0, Vector::new(10.7, 21.0), 3);
    let snap = engine.tick(0.0, &idle());
    let ship = snap.sprites.iter().find(|s| s.symbol == 'a').unwrap();
    assert_eq!((ship.x, ship.row), (10.0, 10.0));
    assert_eq!(ship.color, Palette::Bright);
    let heading = snap.sprites.iter().find(|s| s.symbol == '\\').unwrap();
    assert_eq!((heading.x, heading.row), (11.0, 11.0));
}

#[test]
fn test_flash_color_alternates() {
    use crate::systems::render::flash_color;
    assert_eq!(flash_color(0.0), Palette::Bright);
    assert_eq!(flash_color(0.3), Palette::Ember);
    assert_eq!(flash_color(0.6), Palette::Bright);
    assert_eq!(flash_color(1.9), Palette::Ember);
}

#[test]
fn test_space_theme_swells() {
    let mut engine = SimulationEngine::new(SimConfig {
        space_theme: true,
        ..Default::default()
    });
    engine.start_match(Players::Two);
    let snap = engine.tick(0.0, &idle());
    let swells: Vec<_> = snap.sprites.iter().filter(|s| s.color == Palette::Sea).collect();
    assert_eq!(swells.len(), SWELL_COUNT);
    assert!(swells.iter().all(|s| s.symbol == '.' && !s.bold));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        columns: 120,
        rows: 40,
        chasers_per_ship: 1,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone());
    let mut engine_b = SimulationEngine::new(config);
    let start = TickInput {
        new_game: Some(Players::One),
        ..Default::default()
    };
    engine_a.tick(0.0, &start);
    engine_b.tick(0.0, &start);

    let mut input = idle();
    for frame in 0..300 {
        input.slots[0] = ShipControls {
            thrust: frame % 3 == 0,
            turn_left: frame % 17 == 0,
            fire: frame % 50 == 0,
            ..Default::default()
        };
        let snap_a = engine_a.tick(1.0 / 60.0, &input);
        let snap_b = engine_b.tick(1.0 / 60.0, &input);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "diverged at frame {frame}");
    }
}
