//! Ship autopilot.
//!
//! The autopilot thinks in fixed quanta independent of the frame rate. Each
//! quantum it either opens the throttle, turns toward the target, or fires
//! once it is aimed. A turn in the opposite direction to the previous one is
//! held back for a short while so the pilot does not wobble across the aim
//! line.

use skirmish_core::components::PilotMemory;
use skirmish_core::constants::*;
use skirmish_core::controls::ShipControls;
use skirmish_core::types::Vector;

/// What the autopilot knows about its ship for one frame.
pub struct PilotContext {
    /// Unit vector of the ship's current facing.
    pub heading: Vector,
    /// Minimum displacement from the ship to its target, if the target exists.
    pub offset_to_target: Option<Vector>,
    pub speed: i32,
    pub top_speed: i32,
}

/// Run the autopilot for `elapsed` seconds and return the controls to assert
/// this frame. Controls from several quanta in one frame are combined.
pub fn drive(memory: &mut PilotMemory, ctx: &PilotContext, elapsed: f64) -> ShipControls {
    memory.backlog += elapsed;
    memory.since_last_turn += elapsed;

    let mut controls = ShipControls::default();
    while memory.backlog > AUTOPILOT_QUANTUM {
        controls.merge(step(memory, ctx));
        memory.backlog -= AUTOPILOT_QUANTUM;
    }
    controls
}

/// One decision quantum.
fn step(memory: &mut PilotMemory, ctx: &PilotContext) -> ShipControls {
    let mut controls = ShipControls::default();

    if ctx.speed < ctx.top_speed {
        controls.thrust = true;
        return controls;
    }
    let Some(offset) = ctx.offset_to_target else {
        return controls;
    };

    let turn = turn_toward(offset, ctx.heading);
    let may_turn = turn != 0
        && (turn != -memory.last_turn || memory.since_last_turn > AUTOPILOT_TURN_HOLD);
    if may_turn {
        if turn > 0 {
            controls.turn_right = true;
        } else {
            controls.turn_left = true;
        }
        memory.last_turn = turn;
        memory.since_last_turn = 0.0;
    } else {
        controls.fire = true;
    }
    controls
}

/// Turn direction that brings `heading` toward `offset`: -1 left, +1 right,
/// 0 when already aimed within tolerance.
pub fn turn_toward(offset: Vector, heading: Vector) -> i8 {
    let cross = offset.normalize_or_zero().perp_dot(heading);
    if cross > AUTOPILOT_AIM_TOLERANCE {
        -1
    } else if cross < -AUTOPILOT_AIM_TOLERANCE {
        1
    } else {
        0
    }
}
