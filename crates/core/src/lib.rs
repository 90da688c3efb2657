#![deny(unsafe_code)]
//! Function-valued image algebra.
//!
//! An image here is not a pixel buffer but a pure function from a 2D
//! [`Point`] to a value: a color ([`Image`]), a region membership flag
//! ([`Region`]), or a mixing fraction ([`Blend`]). Combinators build complex
//! images by wrapping simpler ones; nothing is evaluated until the final
//! function is called with a concrete coordinate, so compositions stay lazy
//! and resolution-independent.
//!
//! Rasterization lives in the `imagery-raster` crate; this crate is the pure
//! algebra only.

pub mod color;
pub mod combinators;
pub mod compositing;
pub mod coord;
pub mod error;
pub mod functional;
pub mod image;
pub mod patterns;

pub use color::Srgb;
pub use combinators::{rotate, scale, translate};
pub use compositing::{cond, darken, lerp, lighten};
pub use coord::{Point, Vector};
pub use error::ImageError;
pub use functional::{identity, lift2, lift3};
pub use image::{BaseImage, Blend, Fraction, Image, Region};
pub use patterns::{
    checker, circle, constant, polar_checker, rings, simplex_blend, vertical_stripe,
};
