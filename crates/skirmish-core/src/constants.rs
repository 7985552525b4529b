//! Simulation constants and tuning parameters.

use crate::enums::Palette;

/// Default frame rate of the real-time loop (Hz).
pub const FRAME_RATE: f64 = 60.0;

// --- Headings ---

/// Number of equally spaced ship headings.
pub const HEADINGS: u32 = 8;

/// Grid offset from a ship to its heading glyph, indexed by facing.
/// The same table places the torpedo muzzle (y doubled in world space).
pub const MUZZLE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (2, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-2, 0),
    (-1, -1),
];

/// Heading glyph drawn at the muzzle offset, indexed by facing.
pub const HEADING_GLYPHS: [char; 8] = ['|', '/', '-', '\\', '|', '/', '-', '\\'];

// --- Ships ---

/// Throttle steps available to an undamaged ship. Each torpedo hit removes one.
pub const SHIP_TOP_SPEED: i32 = 5;

/// Torpedoes a ship carries at match start.
pub const SHIP_AMMO: u32 = 3;

/// World units per second contributed by one throttle step.
pub const SHIP_SPEED_SCALE: f64 = 10.0;

/// Velocity half-life shared by every inertial body (seconds).
pub const DEFAULT_HALF_LIFE: f64 = 1.0;

/// Hull flash duration after a torpedo hit (seconds).
pub const HIT_FLASH_SECS: f64 = 2.0;

/// Glyphs for the two ships, by slot.
pub const SHIP_SYMBOLS: [char; 2] = ['a', 'p'];

/// Spawn point of the first ship (world units).
pub const FIRST_SPAWN: (f64, f64) = (30.0, 30.0);

/// Inset of the second ship's spawn point from the far corner.
pub const SECOND_SPAWN_INSET: f64 = 30.0;

/// Particles thrown out when two hulls ram each other.
pub const RAM_BURST_PARTICLES: usize = 60;

/// Particle speed of a ramming burst.
pub const RAM_BURST_SPEED: f64 = 16.0;

// --- Torpedoes ---

/// Powered thrust of a torpedo along its launch heading.
pub const TORPEDO_THRUST: f64 = 300.0;

/// Torpedo flight time before it expires (seconds).
pub const TORPEDO_LIFETIME: f64 = 1.25;

/// A torpedo only detonates once its remaining life drops below this.
pub const TORPEDO_ARM_BELOW: f64 = 1.1;

/// Explosion size when a hit leaves the target flying.
pub const HIT_PARTICLES: usize = 8;

/// Explosion size when a hit destroys the target.
pub const KILL_PARTICLES: usize = 30;

/// Default particle speed of an explosion.
pub const EXPLOSION_SPEED: f64 = 8.0;

/// Share of the target's velocity inherited by torpedo debris.
pub const DEBRIS_VELOCITY_SHARE: f64 = 0.2;

// --- Particles ---

/// Fade sequence of an explosion particle, oldest first.
pub const FADE_SEQUENCE: [(Palette, f64); 4] = [
    (Palette::Bright, 0.25),
    (Palette::Flame, 0.25),
    (Palette::Ember, 0.25),
    (Palette::Smoke, 0.25),
];

/// Remaining phase time at or below which a fade phase counts as spent.
pub const FADE_EPSILON: f64 = 1e-9;

// --- Chasers ---

/// Pursuit speed of a chaser.
pub const CHASER_SPEED: f64 = 50.0;

/// Inside this range a chaser backs off instead of closing.
pub const CHASER_DEAD_ZONE: f64 = 5.0;

/// Distance from its target at which a chaser spawns.
pub const CHASER_SPAWN_RADIUS: f64 = 5.0;

/// Torpedo hits a chaser survives.
pub const CHASER_TOP_SPEED: i32 = 5;

// --- Autopilot ---

/// Decision quantum of the autopilot (seconds).
pub const AUTOPILOT_QUANTUM: f64 = 0.1;

/// Minimum time before the autopilot may reverse its turn (seconds).
pub const AUTOPILOT_TURN_HOLD: f64 = 0.5;

/// Cross-product magnitude below which the autopilot considers itself aimed.
pub const AUTOPILOT_AIM_TOLERANCE: f64 = 0.01;

// --- Camera ---

/// Tracking speed of the follow camera.
pub const CAMERA_SPEED: f64 = 50.0;

// --- Backdrop ---

/// Number of background swells on the field.
pub const SWELL_COUNT: usize = 100;

/// Mean dwell time of a swell before it relocates (seconds).
pub const SWELL_MEAN_DWELL: f64 = 4.0;

// --- HUD ---

/// Status text shown for a destroyed or disabled ship.
pub const HUD_DISABLED: &str = "  disabled  ";
