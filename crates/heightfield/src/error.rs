// ---------------------------------------------------------------------------
// TerrainError: typed errors for generation and grid snapshot decoding
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors produced by height-field generation and grid snapshot decoding.
///
/// The first three variants are all parameter-contract violations: they are
/// reported synchronously, before any allocation or random draw, and no
/// partial grid is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Grid size is not of the form 2^k + 1 for k >= 1.
    InvalidSize { size: usize },
    /// Elevation range is empty or inverted (min must be strictly below max).
    InvalidRange { min: f32, max: f32 },
    /// Roughness is negative or not finite.
    InvalidRoughness { roughness: f32 },
    /// Bitcode decoding of a grid snapshot failed (corrupt or truncated data).
    Decode(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidSize { size } => {
                write!(f, "invalid grid size {size}: must be 2^k + 1 for k >= 1")
            }
            TerrainError::InvalidRange { min, max } => {
                write!(f, "invalid elevation range: min {min} must be below max {max}")
            }
            TerrainError::InvalidRoughness { roughness } => {
                write!(f, "invalid roughness {roughness}: must be finite and >= 0")
            }
            TerrainError::Decode(msg) => write!(f, "grid snapshot decode error: {msg}"),
        }
    }
}

impl std::error::Error for TerrainError {}
