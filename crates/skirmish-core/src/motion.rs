//! Motion models.
//!
//! [`InertialBody`] integrates first-order drag toward a commanded velocity
//! with the closed-form solution of `dv/dt = drag · (target − v)`, so the
//! result does not depend on how a span of time is split into ticks.
//! [`NonInertialBody`] simply moves at the commanded velocity.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HALF_LIFE;
use crate::geometry::Torus;
use crate::types::Vector;

/// Common interface of the motion models.
pub trait Motion {
    fn position(&self) -> Vector;
    fn velocity(&self) -> Vector;
    /// Advance by `dt` seconds toward (or at) `target` velocity.
    fn advance(&mut self, dt: f64, target: Vector, torus: &Torus);
}

/// A body under exponential drag, characterized by the half-life of its
/// velocity gap to the commanded velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertialBody {
    pub position: Vector,
    pub velocity: Vector,
    /// `ln 2 / half_life`.
    pub drag: f64,
}

impl InertialBody {
    /// `half_life` must be positive and finite.
    pub fn with_half_life(position: Vector, velocity: Vector, half_life: f64) -> Self {
        Self {
            position,
            velocity,
            drag: std::f64::consts::LN_2 / half_life,
        }
    }

    /// A body at rest with the default half-life.
    pub fn at_rest(position: Vector) -> Self {
        Self::with_half_life(position, Vector::ZERO, DEFAULT_HALF_LIFE)
    }

    pub fn update(&mut self, dt: f64, target: Vector, torus: &Torus) {
        let gap = target - self.velocity;
        let e = (-dt * self.drag).exp();
        let lag = gap * (1.0 - e) / self.drag;
        self.position = torus.wrap(self.position + target * dt - lag);
        self.velocity = target - gap * e;
    }
}

impl Motion for InertialBody {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn advance(&mut self, dt: f64, target: Vector, torus: &Torus) {
        self.update(dt, target, torus);
    }
}

/// A body that moves exactly at the commanded velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NonInertialBody {
    pub position: Vector,
    pub velocity: Vector,
}

impl NonInertialBody {
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
        }
    }

    pub fn update(&mut self, dt: f64, velocity: Vector, torus: &Torus) {
        self.position = torus.wrap(self.position + velocity * dt);
        self.velocity = velocity;
    }
}

impl Motion for NonInertialBody {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn advance(&mut self, dt: f64, target: Vector, torus: &Torus) {
        self.update(dt, target, torus);
    }
}
