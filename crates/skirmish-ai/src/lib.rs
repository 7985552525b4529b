//! Computer control for SKIRMISH.
//!
//! Pure decision functions for the autopilot that flies a ship and for the
//! pursuit drones. No ECS dependency: callers pass plain data in and apply
//! the result themselves.

pub mod pilot;
pub mod pursuit;

pub use skirmish_core as core;
