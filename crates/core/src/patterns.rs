//! Pattern generators: terminal images computed from closed-form predicates.
//!
//! Boundary conventions matter for pixel-identical output: circle and rings
//! are inclusive on the inner edge (`<= r`), checker and stripe use floor
//! and closed-interval semantics exactly as written.

use crate::coord::Point;
use crate::image::{BaseImage, Blend};
use noise::{NoiseFn, OpenSimplex};
use std::f64::consts::TAU;

/// The same value at every coordinate.
pub fn constant<T>(t: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(move |_| t.clone())
}

/// A filled disc: `inner` within distance `r` of `center` (inclusive),
/// `outer` beyond it.
pub fn circle<T>(center: Point, r: f64, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    // Convert the center once; distance comparison happens in Cartesian space.
    let center = center.to_cartesian();
    BaseImage::new(move |p: Point| {
        if p.distance(center) <= r {
            inner.clone()
        } else {
            outer.clone()
        }
    })
}

/// A checkerboard of `d` by `d` Cartesian squares: `a` where
/// `floor(x/d) + floor(y/d)` is even, `b` elsewhere.
pub fn checker<T>(d: f64, a: T, b: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(move |p: Point| {
        let (x, y) = p.xy();
        let cell = ((x / d).floor() + (y / d).floor()) as i64;
        if cell % 2 == 0 {
            a.clone()
        } else {
            b.clone()
        }
    })
}

/// A polar checkerboard: `n` angular wedges per ring of width `d`.
///
/// The angle is rescaled so a full turn spans `n` periods of width `d`,
/// then a Cartesian [`checker`] is sampled with radius on one axis and the
/// rescaled angle on the other.
pub fn polar_checker<T>(d: f64, n: u32, a: T, b: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    let board = checker(d, a, b);
    BaseImage::new(move |p: Point| {
        let (radius, angle) = p.radius_angle();
        board.eval(Point::cartesian(radius, d * n as f64 * angle / TAU))
    })
}

/// Concentric bands of width `d` around `center`: `a` where
/// `floor(distance/d)` is even, `b` elsewhere.
pub fn rings<T>(center: Point, d: f64, a: T, b: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    let center = center.to_cartesian();
    BaseImage::new(move |p: Point| {
        if (p.distance(center) / d).floor() as i64 % 2 == 0 {
            a.clone()
        } else {
            b.clone()
        }
    })
}

/// A vertical band of width `d` centered on the y axis: `a` where
/// `-d/2 <= x <= d/2`, `b` elsewhere.
pub fn vertical_stripe<T>(d: f64, a: T, b: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(move |p: Point| {
        let (x, _) = p.xy();
        if -d / 2.0 <= x && x <= d / 2.0 {
            a.clone()
        } else {
            b.clone()
        }
    })
}

/// An organic mixing mask from OpenSimplex noise, deterministic per `seed`.
///
/// `scale` is the spatial frequency: larger values produce finer detail.
/// Output is folded from the noise range into [0, 1].
pub fn simplex_blend(seed: u32, scale: f64) -> Blend {
    let noise = OpenSimplex::new(seed);
    BaseImage::new(move |p: Point| {
        let (x, y) = p.xy();
        (noise.get([x * scale, y * scale]) * 0.5 + 0.5).clamp(0.0, 1.0)
    })
}
