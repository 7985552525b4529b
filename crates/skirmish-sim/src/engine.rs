//! Simulation engine.
//!
//! `SimulationEngine` owns the entity registry, applies per-tick input, runs
//! one update per entity in registry order, and produces `FrameSnapshot`s.
//! Completely headless (no terminal dependency), enabling deterministic
//! testing.

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use skirmish_core::components::HumanPilot;
use skirmish_core::constants::TORPEDO_ARM_BELOW;
use skirmish_core::controls::{ShipControls, TickInput};
use skirmish_core::enums::{CameraModel, EntityKind, MatchPhase, Players};
use skirmish_core::events::CombatEvent;
use skirmish_core::geometry::Torus;
use skirmish_core::motion::InertialBody;
use skirmish_core::state::FrameSnapshot;
use skirmish_core::types::{SimTime, Vector};

use crate::camera::Camera;
use crate::registry::Registry;
use crate::systems::{self, Pass};
use crate::world_setup;

/// Configuration for a simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Grid columns of the field.
    pub columns: u32,
    /// Grid rows of the field (the HUD row excluded).
    pub rows: u32,
    /// Chasers spawned around each ship at match start.
    pub chasers_per_ship: usize,
    /// Torpedoes detonate once their remaining life drops below this.
    pub torpedo_arm_below: f64,
    /// Keep the camera on the midpoint of the ships.
    pub follow_camera: bool,
    pub camera_model: CameraModel,
    /// Draw the backdrop as stars instead of waves.
    pub space_theme: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            columns: 80,
            rows: 23,
            chasers_per_ship: 0,
            torpedo_arm_below: TORPEDO_ARM_BELOW,
            follow_camera: false,
            camera_model: CameraModel::default(),
            space_theme: false,
        }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: Registry,
    torus: Torus,
    rng: ChaCha8Rng,
    config: SimConfig,
    time: SimTime,
    phase: MatchPhase,
    /// Ship entity in each HUD slot for the current match.
    ships: [Option<Entity>; 2],
    camera: Option<Camera>,
    events: Vec<CombatEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: Registry::new(),
            torus: Torus::new(config.columns, config.rows),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            camera: config.follow_camera.then(|| Camera::new(config.camera_model)),
            config,
            time: SimTime::default(),
            phase: MatchPhase::default(),
            ships: [None; 2],
            events: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot.
    pub fn tick(&mut self, dt: f64, input: &TickInput) -> FrameSnapshot {
        if let Some(players) = input.new_game {
            self.start_match(players);
        }

        if self.phase == MatchPhase::Running {
            self.apply_helm(&input.slots);
            self.run_pass(dt);
            self.update_camera(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Discard everything and build a new match.
    pub fn start_match(&mut self, players: Players) {
        self.registry.clear();
        self.time = SimTime::default();
        self.camera = self
            .config
            .follow_camera
            .then(|| Camera::new(self.config.camera_model));
        self.ships = world_setup::setup_match(
            &mut self.registry,
            &mut self.rng,
            &self.torus,
            players,
            self.config.chasers_per_ship,
        );
        self.registry.commit();
        self.phase = MatchPhase::Running;

        info!(
            ?players,
            columns = self.torus.columns,
            rows = self.torus.rows,
            entities = self.registry.len(),
            "match started"
        );
        self.events.push(CombatEvent::MatchStarted {
            players,
            seed: self.config.seed,
        });
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Ship in HUD slot `slot`, if it is still flying.
    pub fn ship(&self, slot: usize) -> Option<Entity> {
        self.ships
            .get(slot)
            .copied()
            .flatten()
            .filter(|&e| self.registry.is_live(e))
    }

    /// Camera centre in grid units; the origin when the camera is off.
    pub fn camera_centre(&self) -> Vector {
        self.camera.as_ref().map(Camera::centre).unwrap_or(Vector::ZERO)
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Put a human-flown ship on the field (for tests needing exact placement).
    #[cfg(test)]
    pub fn spawn_test_ship(&mut self, slot: usize, position: Vector, facing: u32) -> Entity {
        let entity = world_setup::spawn_ship(&mut self.registry, &mut self.rng, position, slot, true);
        if let Ok(mut ship) = self
            .registry
            .world()
            .get::<&mut skirmish_core::components::Ship>(entity)
        {
            ship.facing = facing;
        }
        self.registry.commit();
        self.ships[slot] = Some(entity);
        self.phase = MatchPhase::Running;
        entity
    }

    /// Copy human controls onto their ships. Autopilot ships ignore input.
    fn apply_helm(&mut self, slots: &[ShipControls; 2]) {
        let world = self.registry.world_mut();
        for (slot, ship) in self.ships.iter().enumerate() {
            let Some(ship) = *ship else {
                continue;
            };
            if let Ok((_, helm)) = world.query_one_mut::<(&HumanPilot, &mut ShipControls)>(ship) {
                *helm = slots[slot];
            }
        }
    }

    /// Update every entity once, in registry order, then fold in spawns.
    fn run_pass(&mut self, dt: f64) {
        let mut pass = Pass {
            registry: &mut self.registry,
            torus: self.torus,
            rng: &mut self.rng,
            events: &mut self.events,
            torpedo_arm_below: self.config.torpedo_arm_below,
        };
        for entity in pass.registry.snapshot() {
            // Removed earlier in this pass.
            let Some(kind) = pass.registry.kind(entity) else {
                continue;
            };
            match kind {
                EntityKind::Ship => systems::ship::update(&mut pass, entity, dt),
                EntityKind::Torpedo => systems::torpedo::update(&mut pass, entity, dt),
                EntityKind::Particle => systems::particle::update(&mut pass, entity, dt),
                EntityKind::Chaser => systems::chaser::update(&mut pass, entity, dt),
                EntityKind::Autopilot => systems::autopilot::update(&mut pass, entity, dt),
                EntityKind::Swell => systems::swell::update(&mut pass, entity, dt),
            }
        }
        self.registry.commit();
        trace!(
            tick = self.time.tick,
            entities = self.registry.len(),
            "pass complete"
        );
    }

    fn update_camera(&mut self, dt: f64) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let world = self.registry.world();
        let position = |ship: Option<Entity>| {
            ship.and_then(|e| world.get::<&InertialBody>(e).ok().map(|b| b.position))
        };
        let a = position(self.ships[0]);
        let b = position(self.ships[1]);
        camera.update(dt, a, b, &self.torus);
    }

    fn build_snapshot(&self, events: Vec<CombatEvent>) -> FrameSnapshot {
        let status = (0..self.ships.len())
            .map(|slot| systems::hud::ship_status(&self.registry, slot, self.ship(slot)))
            .collect();
        FrameSnapshot {
            time: self.time,
            phase: self.phase,
            camera: self.camera_centre(),
            sprites: systems::render::collect(&self.registry, self.config.space_theme),
            status,
            events,
            entity_count: self.registry.len(),
        }
    }
}
