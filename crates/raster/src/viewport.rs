//! Pixel-grid to world-coordinate mapping.
//!
//! The world origin sits at the center of the raster, the y axis points up,
//! and `span` world units fit across the raster's width. Samples are taken
//! at pixel centers.

use imagery_core::{ImageError, Point};

/// A sampling window over the Cartesian plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    span: f64,
}

impl Viewport {
    /// Creates a viewport of `width` by `height` pixels covering `span`
    /// world units horizontally.
    ///
    /// Returns `ImageError::InvalidDimensions` if either dimension is zero
    /// or `span` is not a positive finite number.
    pub fn new(width: usize, height: usize, span: f64) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || !span.is_finite() || span <= 0.0 {
            return Err(ImageError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            span,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units across the raster width.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// World units per pixel.
    pub fn pixel_size(&self) -> f64 {
        self.span / self.width as f64
    }

    /// World coordinate of the center of pixel `(px, py)`.
    ///
    /// Row 0 is the top of the raster, so increasing `py` walks down the
    /// world's y axis.
    pub fn point_at(&self, px: usize, py: usize) -> Point {
        let unit = self.pixel_size();
        let x = (px as f64 + 0.5 - self.width as f64 / 2.0) * unit;
        let y = (self.height as f64 / 2.0 - py as f64 - 0.5) * unit;
        Point::cartesian(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Viewport::new(0, 8, 1.0).is_err());
        assert!(Viewport::new(8, 0, 1.0).is_err());
    }

    #[test]
    fn new_rejects_non_positive_or_non_finite_span() {
        assert!(Viewport::new(8, 8, 0.0).is_err());
        assert!(Viewport::new(8, 8, -2.0).is_err());
        assert!(Viewport::new(8, 8, f64::NAN).is_err());
        assert!(Viewport::new(8, 8, f64::INFINITY).is_err());
    }

    #[test]
    fn accessors_report_construction_values() {
        let vp = Viewport::new(32, 16, 4.0).unwrap();
        assert_eq!(vp.width(), 32);
        assert_eq!(vp.height(), 16);
        assert!(approx_eq(vp.span(), 4.0));
        assert!(approx_eq(vp.pixel_size(), 0.125));
    }

    #[test]
    fn top_left_pixel_maps_to_upper_left_world_quadrant() {
        let vp = Viewport::new(4, 4, 4.0).unwrap();
        let (x, y) = vp.point_at(0, 0).xy();
        assert!(approx_eq(x, -1.5));
        assert!(approx_eq(y, 1.5));
    }

    #[test]
    fn bottom_right_pixel_maps_to_lower_right_world_quadrant() {
        let vp = Viewport::new(4, 4, 4.0).unwrap();
        let (x, y) = vp.point_at(3, 3).xy();
        assert!(approx_eq(x, 1.5));
        assert!(approx_eq(y, -1.5));
    }

    #[test]
    fn odd_sized_raster_centers_the_middle_pixel_on_the_origin() {
        let vp = Viewport::new(5, 5, 5.0).unwrap();
        let (x, y) = vp.point_at(2, 2).xy();
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 0.0));
    }

    #[test]
    fn non_square_raster_keeps_square_pixels() {
        let vp = Viewport::new(8, 4, 8.0).unwrap();
        assert!(approx_eq(vp.pixel_size(), 1.0));
        let (x, y) = vp.point_at(0, 0).xy();
        assert!(approx_eq(x, -3.5));
        assert!(approx_eq(y, 1.5));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn dimension() -> impl Strategy<Value = usize> {
            1_usize..=128
        }

        proptest! {
            #[test]
            fn samples_stay_inside_the_horizontal_span(
                w in dimension(), h in dimension(), span in 0.01_f64..1e4,
            ) {
                let vp = Viewport::new(w, h, span).unwrap();
                let (x, _) = vp.point_at(0, 0).xy();
                let (x2, _) = vp.point_at(w - 1, 0).xy();
                prop_assert!(x.abs() <= span / 2.0);
                prop_assert!(x2.abs() <= span / 2.0);
            }

            #[test]
            fn horizontally_mirrored_pixels_have_opposite_x(
                w in dimension(), h in dimension(), span in 0.01_f64..1e4,
                px in 0_usize..128, py in 0_usize..128,
            ) {
                let px = px % w;
                let py = py % h;
                let vp = Viewport::new(w, h, span).unwrap();
                let (x, _) = vp.point_at(px, py).xy();
                let (mx, _) = vp.point_at(w - 1 - px, py).xy();
                prop_assert!((x + mx).abs() < 1e-9 * (1.0 + span));
            }
        }
    }
}
