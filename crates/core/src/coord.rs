//! Dual Cartesian/polar coordinate type.
//!
//! A [`Point`] carries its own representation tag so that every combinator
//! can convert to whichever frame it needs before doing arithmetic. Both
//! conversions are idempotent, and conversion from Cartesian form always
//! normalizes the angle into `[0, 2π)`.
//!
//! All operations are total: NaN and infinity flow through with IEEE-754
//! semantics, and a polar point with radius 0 carries whatever angle it was
//! built with (any angle is valid there).

use std::f64::consts::TAU;

/// Plain 2D offset used for translation; no Cartesian/polar tag.
pub use glam::DVec2 as Vector;

/// A 2D point in either Cartesian or polar form.
///
/// Immutable value type: every operation returns a new `Point`. Angles are
/// in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point {
    /// Cartesian components.
    Cartesian { x: f64, y: f64 },
    /// Polar components; `angle` in radians.
    Polar { radius: f64, angle: f64 },
}

/// Wraps an `atan2` result into `[0, 2π)`.
fn normalize_angle(a: f64) -> f64 {
    let a = if a < 0.0 { a + TAU } else { a };
    // adding 2π to a tiny negative angle can round up to exactly 2π
    if a >= TAU {
        a - TAU
    } else {
        a
    }
}

impl Point {
    /// The Cartesian origin (0, 0).
    pub const ORIGIN: Point = Point::Cartesian { x: 0.0, y: 0.0 };

    /// Creates a Cartesian-tagged point.
    pub fn cartesian(x: f64, y: f64) -> Point {
        Point::Cartesian { x, y }
    }

    /// Creates a polar-tagged point; `angle` in radians.
    pub fn polar(radius: f64, angle: f64) -> Point {
        Point::Polar { radius, angle }
    }

    /// True if the point is in polar form.
    pub fn is_polar(&self) -> bool {
        matches!(self, Point::Polar { .. })
    }

    /// Cartesian components `(x, y)`, converting from polar if needed.
    pub fn xy(self) -> (f64, f64) {
        match self {
            Point::Cartesian { x, y } => (x, y),
            Point::Polar { radius, angle } => (radius * angle.cos(), radius * angle.sin()),
        }
    }

    /// Polar components `(radius, angle)`, converting from Cartesian if needed.
    ///
    /// The converted angle lies in `[0, 2π)`. A point already in polar form
    /// is returned unchanged, whatever its angle.
    pub fn radius_angle(self) -> (f64, f64) {
        match self {
            Point::Polar { radius, angle } => (radius, angle),
            Point::Cartesian { x, y } => {
                let radius = Vector::new(x, y).length();
                (radius, normalize_angle(y.atan2(x)))
            }
        }
    }

    /// Converts to polar form; idempotent on polar input.
    pub fn to_polar(self) -> Point {
        let (radius, angle) = self.radius_angle();
        Point::Polar { radius, angle }
    }

    /// Converts to Cartesian form; idempotent on Cartesian input.
    pub fn to_cartesian(self) -> Point {
        let (x, y) = self.xy();
        Point::Cartesian { x, y }
    }

    /// Euclidean distance to `other`, computed in Cartesian space.
    ///
    /// Polar operands are converted first; the tags of the operands do not
    /// affect the result.
    pub fn distance(self, other: Point) -> f64 {
        let (x1, y1) = self.xy();
        let (x2, y2) = other.xy();
        Vector::new(x1, y1).distance(Vector::new(x2, y2))
    }

    /// Euclidean distance to the origin.
    pub fn distance_to_origin(self) -> f64 {
        self.distance(Point::ORIGIN)
    }
}
