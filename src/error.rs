//! Errors surfaced at the library boundary.
//!
//! Mesh building itself cannot fail once its settings are accepted, so every
//! variant here is either a configuration rejection or a map-file problem.

use std::io;

use thiserror::Error;

/// Errors returned by settings validation and map-file handling.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// Hex outer radius must be finite and strictly positive.
    #[error("invalid hex size {0}: must be finite and > 0")]
    InvalidHexSize(f32),

    /// Bevel fraction must lie in `[0, 1]`.
    #[error("invalid bevel size {0}: must be within [0, 1]")]
    InvalidBevelSize(f32),

    /// Dome height factor must be finite.
    #[error("invalid dome height factor {0}: must be finite")]
    InvalidDomeHeight(f32),

    /// A map cell lies outside the declared grid dimensions.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        /// Cell column.
        x: i32,
        /// Cell row.
        y: i32,
        /// Declared grid width.
        width: u32,
        /// Declared grid height.
        height: u32,
    },

    /// Reading or writing a map file failed.
    #[error("map file io: {0}")]
    Io(#[from] io::Error),

    /// A map file is not valid JSON for the expected layout.
    #[error("map file json: {0}")]
    Json(#[from] serde_json::Error),
}
