//! Core types and definitions for the SKIRMISH simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! torus geometry, motion models, components, controls, view types,
//! events, and constants. It has no dependency on the terminal or any
//! runtime framework.

pub mod components;
pub mod constants;
pub mod controls;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod types;
