#![deny(unsafe_code)]
//! CPU rasterization for the imagery function-valued image algebra.
//!
//! The core algebra never materializes pixels; this crate supplies the
//! sampling policy. A [`Viewport`] maps pixel centers to world coordinates,
//! [`pixel::image_to_rgba`] evaluates an [`Image`](imagery_core::Image)
//! over the grid, and [`scenes`] holds a registry of named example
//! compositions for the CLI. PNG output lives behind the default `png`
//! feature so downstream crates can take the pixel path without the
//! `image` dependency.

pub mod pixel;
pub mod scenes;
pub mod viewport;

#[cfg(feature = "png")]
pub mod snapshot;

pub use scenes::{list_scenes, scene_from_name, SCENE_NAMES};
pub use viewport::Viewport;
