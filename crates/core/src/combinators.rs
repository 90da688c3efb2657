//! Geometric combinators: rotate, translate, scale.
//!
//! Each wraps an image in a coordinate transform applied before delegating
//! to the wrapped image, so with right-to-left [`compose!`](crate::compose)
//! the transform is listed last (innermost). All three are generic over the
//! carried value type, take the wrapped image by value, and are pure.

use crate::compose;
use crate::coord::{Point, Vector};
use crate::image::BaseImage;

/// Rotates an image about the origin by `phi` radians.
///
/// The sampled point is moved backward by `phi` in polar form, which
/// rotates the image forward by `phi`.
pub fn rotate<T: 'static>(image: BaseImage<T>, phi: f64) -> BaseImage<T> {
    BaseImage::new(compose!(
        move |p| image.eval(p),
        move |p: Point| {
            let (radius, angle) = p.radius_angle();
            Point::polar(radius, angle - phi)
        },
    ))
}

/// Translates an image by `v`.
///
/// The sampled point is forced into Cartesian form first; translation is
/// undefined directly on polar coordinates.
pub fn translate<T: 'static>(image: BaseImage<T>, v: Vector) -> BaseImage<T> {
    BaseImage::new(compose!(
        move |p| image.eval(p),
        move |p: Point| {
            let (x, y) = p.xy();
            Point::cartesian(x - v.x, y - v.y)
        },
    ))
}

/// Scales an image about the origin by `s`.
///
/// The sampled radius is divided by `s` in polar form. `s = 0` is undefined
/// (division by zero) and deliberately unguarded; the caller supplies a
/// nonzero scale.
pub fn scale<T: 'static>(image: BaseImage<T>, s: f64) -> BaseImage<T> {
    BaseImage::new(compose!(
        move |p| image.eval(p),
        move |p: Point| {
            let (radius, angle) = p.radius_angle();
            Point::polar(radius / s, angle)
        },
    ))
}

impl<T: 'static> BaseImage<T> {
    /// Chaining form of [`rotate`].
    pub fn rotate(self, phi: f64) -> Self {
        rotate(self, phi)
    }

    /// Chaining form of [`translate`].
    pub fn translate(self, v: Vector) -> Self {
        translate(self, v)
    }

    /// Chaining form of [`scale`].
    pub fn scale(self, s: f64) -> Self {
        scale(self, s)
    }
}
