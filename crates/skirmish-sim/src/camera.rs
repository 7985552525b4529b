//! Follow camera.
//!
//! Drifts toward the midpoint of the two ships at a fixed tracking speed.
//! The midpoint is taken around the short way of the torus, so ships on
//! either side of an edge keep the camera near that edge.

use skirmish_core::constants::{CAMERA_SPEED, DEFAULT_HALF_LIFE};
use skirmish_core::enums::CameraModel;
use skirmish_core::geometry::Torus;
use skirmish_core::motion::{InertialBody, Motion, NonInertialBody};
use skirmish_core::types::Vector;

enum Rig {
    Inertial(InertialBody),
    Direct(NonInertialBody),
}

impl Rig {
    fn as_motion(&mut self) -> &mut dyn Motion {
        match self {
            Rig::Inertial(body) => body as &mut dyn Motion,
            Rig::Direct(body) => body as &mut dyn Motion,
        }
    }

    fn position(&self) -> Vector {
        match self {
            Rig::Inertial(body) => body.position,
            Rig::Direct(body) => body.position,
        }
    }
}

pub struct Camera {
    rig: Rig,
}

impl Camera {
    pub fn new(model: CameraModel) -> Self {
        let rig = match model {
            CameraModel::Inertial => Rig::Inertial(InertialBody::with_half_life(
                Vector::ZERO,
                Vector::ZERO,
                DEFAULT_HALF_LIFE,
            )),
            CameraModel::Direct => Rig::Direct(NonInertialBody::new(Vector::ZERO)),
        };
        Self { rig }
    }

    /// Track the ships at `a` and `b`. With one ship missing the camera
    /// follows the other; with both gone it holds still.
    pub fn update(&mut self, dt: f64, a: Option<Vector>, b: Option<Vector>, torus: &Torus) {
        let aim = match (a, b) {
            (Some(a), Some(b)) => midpoint(a, b, torus),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return,
        };
        let offset = torus.offset(self.rig.position(), aim);
        if offset != Vector::ZERO {
            self.rig
                .as_motion()
                .advance(dt, offset.normalize() * CAMERA_SPEED, torus);
        }
    }

    /// Camera position in grid units (columns, rows).
    pub fn centre(&self) -> Vector {
        let p = self.rig.position();
        Vector::new(p.x, p.y / 2.0)
    }
}

/// Midpoint of `a` and `b` the short way round.
pub fn midpoint(a: Vector, b: Vector, torus: &Torus) -> Vector {
    torus.min_displacement(a - b) / 2.0 + b
}
