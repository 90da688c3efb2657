//! The function-valued image type.
//!
//! A [`BaseImage<T>`] is an opaque, immutable function from [`Point`] to a
//! value. It has no identity beyond its behavior: images are never compared,
//! only evaluated. Evaluation is pure and recomputes from scratch on every
//! call, so disjoint coordinates may be sampled concurrently from several
//! threads without locking.

use crate::color::Srgb;
use crate::coord::Point;
use std::sync::Arc;

/// A mixing weight in `[0, 1]`.
pub type Fraction = f64;

/// A lazily evaluated image: a pure function from [`Point`] to `T`.
///
/// Cloning is cheap (shared function graph) and combinators take their
/// inputs by value, so composed images form immutable trees of closures
/// with no lifetime hazards.
pub struct BaseImage<T: 'static> {
    f: Arc<dyn Fn(Point) -> T + Send + Sync>,
}

/// Boolean region membership, used by [`cond`](crate::cond).
pub type Region = BaseImage<bool>;

/// Pointwise mixing weight, used by [`lerp`](crate::lerp),
/// [`darken`](crate::darken) and [`lighten`](crate::lighten).
pub type Blend = BaseImage<Fraction>;

/// A color-valued image, the thing a renderer ultimately samples.
pub type Image = BaseImage<Srgb>;

impl<T: 'static> BaseImage<T> {
    /// Wraps a pure function as an image.
    pub fn new(f: impl Fn(Point) -> T + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Evaluates the image at `p`.
    pub fn eval(&self, p: Point) -> T {
        (self.f)(p)
    }
}

impl<T: 'static> Clone for BaseImage<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: 'static> std::fmt::Debug for BaseImage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseImage").finish_non_exhaustive()
    }
}
