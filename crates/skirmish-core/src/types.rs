//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in world space. Columns along x, half-rows along y.
pub type Vector = glam::DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of passes run since the match started.
    pub tick: u64,
    /// Integrated elapsed time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one pass of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
