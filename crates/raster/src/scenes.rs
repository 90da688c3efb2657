//! Registry of named example compositions.
//!
//! Each scene builds an [`Image`] from the core algebra; the CLI selects
//! one by name. Parameters arrive as a JSON object and deserialize into a
//! per-scene struct whose `Default` supplies every value, so `{}` is always
//! a valid parameter set. Unknown keys are rejected to catch typos.

use imagery_core::{
    checker, circle, cond, constant, darken, lerp, lighten, polar_checker, rings, rotate, scale,
    simplex_blend, translate, vertical_stripe, Image, ImageError, Point, Srgb, Vector,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// All available scene names.
pub const SCENE_NAMES: &[&str] = &[
    "checker",
    "polar-wheel",
    "target",
    "stripes",
    "eclipse",
    "glow",
];

/// Returns the scene names in registry order.
pub fn list_scenes() -> Vec<&'static str> {
    SCENE_NAMES.to_vec()
}

fn parse<T: DeserializeOwned>(params: &Value) -> Result<T, ImageError> {
    serde_json::from_value(params.clone()).map_err(|e| ImageError::InvalidParams(e.to_string()))
}

const INK: Srgb = Srgb {
    r: 0.1,
    g: 0.12,
    b: 0.27,
};

const SAND: Srgb = Srgb {
    r: 0.94,
    g: 0.87,
    b: 0.73,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CheckerParams {
    period: f64,
    angle: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for CheckerParams {
    fn default() -> Self {
        Self {
            period: 0.25,
            angle: 0.0,
            a: INK,
            b: SAND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolarWheelParams {
    period: f64,
    wedges: u32,
    zoom: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for PolarWheelParams {
    fn default() -> Self {
        Self {
            period: 0.25,
            wedges: 8,
            zoom: 1.0,
            a: INK,
            b: SAND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TargetParams {
    period: f64,
    cx: f64,
    cy: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for TargetParams {
    fn default() -> Self {
        Self {
            period: 0.2,
            cx: 0.0,
            cy: 0.0,
            a: INK,
            b: SAND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StripesParams {
    width: f64,
    angle: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for StripesParams {
    fn default() -> Self {
        Self {
            width: 0.25,
            angle: 0.0,
            a: INK,
            b: SAND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EclipseParams {
    radius: f64,
    /// Remaining brightness inside the disc; 0 is fully black.
    dim: f64,
    seed: u32,
    noise_scale: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for EclipseParams {
    fn default() -> Self {
        Self {
            radius: 0.6,
            dim: 0.2,
            seed: 7,
            noise_scale: 3.0,
            a: INK,
            b: SAND,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GlowParams {
    period: f64,
    seed: u32,
    noise_scale: f64,
    a: Srgb,
    b: Srgb,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            period: 0.25,
            seed: 7,
            noise_scale: 2.0,
            a: INK,
            b: SAND,
        }
    }
}

/// Builds the named scene with the given JSON parameters.
///
/// Returns `ImageError::UnknownScene` for names not in [`SCENE_NAMES`] and
/// `ImageError::InvalidParams` if the parameter object does not fit the
/// scene's schema.
pub fn scene_from_name(name: &str, params: &Value) -> Result<Image, ImageError> {
    match name {
        "checker" => {
            let p: CheckerParams = parse(params)?;
            Ok(rotate(checker(p.period, p.a, p.b), p.angle))
        }
        "polar-wheel" => {
            let p: PolarWheelParams = parse(params)?;
            Ok(scale(polar_checker(p.period, p.wedges, p.a, p.b), p.zoom))
        }
        "target" => {
            let p: TargetParams = parse(params)?;
            Ok(translate(
                rings(Point::ORIGIN, p.period, p.a, p.b),
                Vector::new(p.cx, p.cy),
            ))
        }
        "stripes" => {
            let p: StripesParams = parse(params)?;
            Ok(rotate(vertical_stripe(p.width, p.a, p.b), p.angle))
        }
        "eclipse" => {
            let p: EclipseParams = parse(params)?;
            let disc = circle(Point::ORIGIN, p.radius, true, false);
            let backdrop = lerp(
                simplex_blend(p.seed, p.noise_scale),
                constant(p.a),
                constant(p.b),
            );
            Ok(cond(
                disc,
                darken(backdrop.clone(), constant(p.dim)),
                backdrop,
            ))
        }
        "glow" => {
            let p: GlowParams = parse(params)?;
            Ok(lighten(
                checker(p.period, p.a, p.b),
                simplex_blend(p.seed, p.noise_scale),
            ))
        }
        other => Err(ImageError::UnknownScene(other.to_string())),
    }
}
