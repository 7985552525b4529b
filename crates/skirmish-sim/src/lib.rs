//! Simulation engine for SKIRMISH.
//!
//! Owns the ordered entity registry over a hecs world, runs one update per
//! entity per tick, and produces `FrameSnapshot`s for the frontend. Headless
//! and deterministic for a given seed and sequence of tick inputs.

pub mod camera;
pub mod engine;
pub mod explosion;
pub mod pacing;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
