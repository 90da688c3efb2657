//! The sRGB color value carried by [`Image`](crate::Image).
//!
//! Components are `f64` in [0, 1]. The type is opaque to the algebra except
//! for [`Srgb::mean`], which the compositing combinators use for all mixing.
//! Serializes as a hex string `"#rrggbb"` for human-readable scene
//! parameters; the hex round-trip has 8-bit quantization, which is
//! acceptable since hex colors are inherently 8-bit.

use crate::error::ImageError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Pure black, the target of [`darken`](crate::darken).
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white, the target of [`lighten`](crate::lighten).
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Weighted mean with `other`.
    ///
    /// `weight` is the proportion attributed to `self`: weight 1 returns
    /// `self` unchanged, weight 0 returns `other`. Out-of-range weights
    /// extrapolate; NaN propagates.
    pub fn mean(self, other: Srgb, weight: f64) -> Srgb {
        Srgb {
            r: other.r + (self.r - other.r) * weight,
            g: other.g + (self.g - other.g) * weight,
            b: other.b + (self.b - other.b) * weight,
        }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ImageError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, ImageError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ImageError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ImageError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ImageError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ImageError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped to [0, 1] and quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Srgb, b: Srgb) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    #[test]
    fn mean_weight_one_returns_self() {
        let red = Srgb::from_hex("#ff0000").unwrap();
        let blue = Srgb::from_hex("#0000ff").unwrap();
        assert!(approx_eq(red.mean(blue, 1.0), red));
    }

    #[test]
    fn mean_weight_zero_returns_other() {
        let red = Srgb::from_hex("#ff0000").unwrap();
        let blue = Srgb::from_hex("#0000ff").unwrap();
        assert!(approx_eq(red.mean(blue, 0.0), blue));
    }

    #[test]
    fn mean_weight_half_averages_components() {
        let mixed = Srgb::WHITE.mean(Srgb::BLACK, 0.5);
        assert!(approx_eq(
            mixed,
            Srgb {
                r: 0.5,
                g: 0.5,
                b: 0.5
            }
        ));
    }

    #[test]
    fn mean_with_nan_weight_propagates() {
        let mixed = Srgb::WHITE.mean(Srgb::BLACK, f64::NAN);
        assert!(mixed.r.is_nan());
    }

    #[test]
    fn black_and_white_constants() {
        assert_eq!(Srgb::BLACK.to_hex(), "#000000");
        assert_eq!(Srgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        let a = Srgb::from_hex("#804020").unwrap();
        let b = Srgb::from_hex("804020").unwrap();
        assert!(approx_eq(a, b));
        assert!((a.r - 0x80 as f64 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let upper = Srgb::from_hex("#FF00AA").unwrap();
        let lower = Srgb::from_hex("#ff00aa").unwrap();
        assert!(approx_eq(upper, lower));
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Srgb::from_hex("#gggggg").is_err());
        assert!(Srgb::from_hex("#fff").is_err());
        assert!(Srgb::from_hex("").is_err());
        assert!(Srgb::from_hex("#ff00ff00").is_err());
    }

    #[test]
    fn to_hex_clamps_out_of_range_components() {
        let color = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(color.to_hex(), "#ff0080");
    }

    #[test]
    fn hex_round_trip() {
        let original = "#c0ffee";
        assert_eq!(Srgb::from_hex(original).unwrap().to_hex(), original);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Srgb::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let green: Srgb = serde_json::from_str("\"#00ff00\"").unwrap();
        assert!(approx_eq(
            green,
            Srgb {
                r: 0.0,
                g: 1.0,
                b: 0.0
            }
        ));
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Srgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn srgb_component() -> impl Strategy<Value = f64> {
            0.0_f64..=1.0
        }

        proptest! {
            #[test]
            fn mean_stays_within_component_bounds(
                r1 in srgb_component(), g1 in srgb_component(), b1 in srgb_component(),
                r2 in srgb_component(), g2 in srgb_component(), b2 in srgb_component(),
                w in 0.0_f64..=1.0,
            ) {
                let a = Srgb { r: r1, g: g1, b: b1 };
                let b = Srgb { r: r2, g: g2, b: b2 };
                let m = a.mean(b, w);
                for (c, lo, hi) in [
                    (m.r, r1.min(r2), r1.max(r2)),
                    (m.g, g1.min(g2), g1.max(g2)),
                    (m.b, b1.min(b2), b1.max(b2)),
                ] {
                    prop_assert!(c >= lo - 1e-12 && c <= hi + 1e-12,
                        "component {c} outside [{lo}, {hi}]");
                }
            }

            #[test]
            fn hex_round_trip_within_quantization(
                r in srgb_component(), g in srgb_component(), b in srgb_component(),
            ) {
                let original = Srgb { r, g, b };
                let round_tripped = Srgb::from_hex(&original.to_hex()).unwrap();
                let max_err = 0.5 / 255.0 + 1e-10;
                prop_assert!((round_tripped.r - original.r).abs() < max_err);
                prop_assert!((round_tripped.g - original.g).abs() < max_err);
                prop_assert!((round_tripped.b - original.b).abs() < max_err);
            }
        }
    }
}
