//! Pure-computation pixel buffer conversion from an [`Image`] and a
//! [`Viewport`].
//!
//! This module is always available (no feature gate) so both the `png`
//! snapshot path and any embedding caller can share the same conversion.

use crate::viewport::Viewport;
use imagery_core::Image;

/// Evaluates an image over the viewport grid to produce an RGBA8 buffer.
///
/// Pixels are emitted in row-major order, top row first. Each sampled color
/// component is clamped to [0, 1] and quantized with rounding; alpha is
/// always 255. The buffer length is `width * height * 4`.
pub fn image_to_rgba(image: &Image, viewport: &Viewport) -> Vec<u8> {
    let mut buf = Vec::with_capacity(viewport.width() * viewport.height() * 4);
    for py in 0..viewport.height() {
        for px in 0..viewport.width() {
            let c = image.eval(viewport.point_at(px, py));
            buf.push((c.r.clamp(0.0, 1.0) * 255.0).round() as u8);
            buf.push((c.g.clamp(0.0, 1.0) * 255.0).round() as u8);
            buf.push((c.b.clamp(0.0, 1.0) * 255.0).round() as u8);
            buf.push(255);
        }
    }
    buf
}
