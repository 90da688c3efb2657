//! Error types for the imagery crates.
//!
//! The algebra itself is total: combinators never fail at evaluation time.
//! Errors arise only at the edges — parsing colors, validating raster
//! dimensions, looking up scenes, and writing files.

use thiserror::Error;

/// Errors produced while building or rasterizing images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Raster width or height was zero, or the viewport span was not a
    /// positive finite number.
    #[error("invalid dimensions: width and height must be non-zero and span positive")]
    InvalidDimensions,

    /// A requested scene name was not in the registry.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// Scene parameters could not be deserialized.
    #[error("invalid scene parameters: {0}")]
    InvalidParams(String),

    /// A file write or encode failure.
    #[error("i/o error: {0}")]
    Io(String),
}
