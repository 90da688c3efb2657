//! Compositing combinators: pointwise selection and color mixing.
//!
//! These are the only color-specific combinators; everything else in the
//! algebra is generic over the carried value. Mixing weight convention
//! follows [`Srgb::mean`]: weight 1 keeps the first image, weight 0 the
//! second.

use crate::color::Srgb;
use crate::coord::Point;
use crate::functional::{lift2, lift3};
use crate::image::{BaseImage, Blend, Fraction, Image, Region};

/// Pointwise selection: `this_way` where `region` holds, `that_way` elsewhere.
///
/// Only the selected branch is evaluated at each point.
pub fn cond(region: Region, this_way: Image, that_way: Image) -> Image {
    BaseImage::new(move |p: Point| {
        if region.eval(p) {
            this_way.eval(p)
        } else {
            that_way.eval(p)
        }
    })
}

/// Pointwise weighted mean of two images.
///
/// `blend` gives the proportion of `this_way`: weight 1 everywhere yields
/// `this_way`, weight 0 everywhere yields `that_way`.
pub fn lerp(blend: Blend, this_way: Image, that_way: Image) -> Image {
    BaseImage::new(lift3(
        |a: Srgb, b: Srgb, w: Fraction| a.mean(b, w),
        move |p| this_way.eval(p),
        move |p| that_way.eval(p),
        move |p| blend.eval(p),
    ))
}

/// Mixes an image toward black; weight 1 leaves it unchanged, weight 0 is
/// fully black.
pub fn darken(image: Image, blend: Blend) -> Image {
    BaseImage::new(lift2(
        |c: Srgb, w: Fraction| c.mean(Srgb::BLACK, w),
        move |p| image.eval(p),
        move |p| blend.eval(p),
    ))
}

/// Mixes an image toward white; weight 1 leaves it unchanged, weight 0 is
/// fully white.
pub fn lighten(image: Image, blend: Blend) -> Image {
    BaseImage::new(lift2(
        |c: Srgb, w: Fraction| c.mean(Srgb::WHITE, w),
        move |p| image.eval(p),
        move |p| blend.eval(p),
    ))
}
