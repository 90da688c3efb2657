//! PNG rendering of an [`Image`] sampled through a [`Viewport`].
//!
//! Feature-gated behind `png` (default on) so embedding callers can use the
//! pixel conversion without pulling in the `image` crate.

use crate::pixel::image_to_rgba;
use crate::viewport::Viewport;
use imagery_core::{Image, ImageError};
use std::path::Path;

/// Samples an image over the viewport and writes the result as a PNG.
///
/// Returns `ImageError::InvalidDimensions` if the viewport dimensions
/// overflow `u32`, or `ImageError::Io` on encode/write failure.
pub fn write_png(img: &Image, viewport: &Viewport, path: &Path) -> Result<(), ImageError> {
    let rgba = image_to_rgba(img, viewport);
    let w = u32::try_from(viewport.width()).map_err(|_| ImageError::InvalidDimensions)?;
    let h = u32::try_from(viewport.height()).map_err(|_| ImageError::InvalidDimensions)?;
    let out = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ImageError::Io("RGBA buffer size mismatch".into()))?;
    out.save(path).map_err(|e| ImageError::Io(e.to_string()))
}
