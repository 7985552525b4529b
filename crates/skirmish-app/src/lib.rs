//! SKIRMISH terminal application.
//!
//! This crate wires the simulation to a real terminal: environment
//! configuration, file logging, crossterm keyboard input, ratatui rendering,
//! and the fixed-rate game loop.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod terminal;

pub use skirmish_core as core;
