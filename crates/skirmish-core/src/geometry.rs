//! Toroidal geometry.
//!
//! The world is a `columns × 2·rows` rectangle whose edges wrap. Vertical
//! positions are tracked in half-row units so ships can move more finely than
//! the character grid allows. Every relative-position query between entities
//! must go through [`Torus::offset`] or [`Torus::min_displacement`]; raw
//! subtraction breaks at the world edges.

use serde::{Deserialize, Serialize};

use crate::types::Vector;

/// Reduce `value` into `[0, modulus)`.
pub fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    // rem_euclid can round a tiny negative up to exactly `modulus`.
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// Unit vector for a discrete heading. Facing 0 points up the screen and
/// headings advance clockwise.
pub fn direction(facing: u32, headings: u32) -> Vector {
    let angle = std::f64::consts::TAU * facing as f64 / headings as f64;
    Vector::new(angle.sin(), -angle.cos())
}

/// Unit vector for an arbitrary angle, same convention as [`direction`].
pub fn heading_vector(angle: f64) -> Vector {
    Vector::new(angle.sin(), -angle.cos())
}

/// The wrapping world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torus {
    /// Grid columns; also the world width.
    pub columns: u32,
    /// Grid rows available to the field; the world height is twice this.
    pub rows: u32,
}

impl Torus {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    /// World width in columns.
    pub fn width(&self) -> f64 {
        self.columns as f64
    }

    /// World height in half-rows.
    pub fn height(&self) -> f64 {
        2.0 * self.rows as f64
    }

    /// Length of the world diagonal.
    pub fn diagonal(&self) -> f64 {
        Vector::new(self.width(), self.height()).length()
    }

    /// Reduce a position into `[0, W) × [0, 2H)`.
    pub fn wrap(&self, v: Vector) -> Vector {
        Vector::new(wrap(v.x, self.width()), wrap(v.y, self.height()))
    }

    /// Shortest signed vector equivalent to `v` on the torus.
    pub fn min_displacement(&self, v: Vector) -> Vector {
        let mut r = self.wrap(v);
        if r.x > self.width() / 2.0 {
            r.x -= self.width();
        }
        if r.y > self.height() / 2.0 {
            r.y -= self.height();
        }
        r
    }

    /// Shortest signed vector from `from` to `to`.
    pub fn offset(&self, from: Vector, to: Vector) -> Vector {
        self.min_displacement(to - from)
    }

    /// Integer cell of a position, after wrapping.
    pub fn cell(&self, p: Vector) -> (i64, i64) {
        let w = self.wrap(p);
        (w.x.floor() as i64, w.y.floor() as i64)
    }

    /// Proximity rule for hits and rams: the integer cells of `a` and `b` are
    /// less than two apart on both axes, measured around the wrap.
    pub fn cells_touch(&self, a: Vector, b: Vector) -> bool {
        let (ax, ay) = self.cell(a);
        let (bx, by) = self.cell(b);
        let dx = fold(ax - bx, self.columns as i64);
        let dy = fold(ay - by, 2 * self.rows as i64);
        dx.abs() < 2 && dy.abs() < 2
    }
}

fn fold(delta: i64, modulus: i64) -> i64 {
    let d = delta.rem_euclid(modulus);
    if d > modulus / 2 {
        d - modulus
    } else {
        d
    }
}

/// Projection of world-space draw positions onto the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Screen cell for a draw position given in columns and grid rows.
    ///
    /// `centre` is the camera position in the same units. Positions that do
    /// not land on the grid (non-finite input) are dropped.
    pub fn project(&self, x: f64, row: f64, centre: Vector) -> Option<(u16, u16)> {
        if self.columns == 0 || self.rows == 0 {
            return None;
        }
        let columns = self.columns as f64;
        let rows = self.rows as f64;
        let sx = wrap(x - centre.x - columns / 2.0, columns).floor();
        let sy = wrap(row - centre.y - rows / 2.0, rows).floor();
        if !(0.0..columns).contains(&sx) || !(0.0..rows).contains(&sy) {
            return None;
        }
        Some((sx as u16, sy as u16))
    }
}
