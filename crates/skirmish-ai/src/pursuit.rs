//! Chaser pursuit steering.

use skirmish_core::constants::{CHASER_DEAD_ZONE, CHASER_SPEED};
use skirmish_core::types::Vector;

/// Commanded velocity for a chaser given the minimum displacement to its
/// target. Inside the dead zone the chaser backs away instead.
pub fn steer(offset: Vector) -> Vector {
    let away = if offset.length() < CHASER_DEAD_ZONE {
        -offset
    } else {
        offset
    };
    away.normalize_or_zero() * CHASER_SPEED
}
