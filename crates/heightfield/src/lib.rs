//! Fractal height-field generation.
//!
//! Synthesizes square grids of elevation values with the
//! midpoint-displacement (diamond-square) algorithm: seeded corners, then
//! alternating diamond/square passes with noise amplitude decaying linearly
//! with step size. Nonzero seeds are deterministic across platforms
//! (ChaCha8); seed `0` draws a fresh entropy-seeded sequence.
//!
//! ```
//! use heightfield::{generate, GenerationParams};
//!
//! let grid = generate(&GenerationParams {
//!     size: 65,
//!     seed: 42,
//!     min_value: 0.0,
//!     max_value: 1.0,
//!     roughness: 0.5,
//! })
//! .unwrap();
//! assert_eq!(grid.values().len(), 65 * 65);
//! ```

pub mod ascii_map;
pub mod config;
pub mod error;
pub mod generation;
pub mod grid;
pub mod rng;

pub use error::TerrainError;
pub use generation::{generate, generate_with_rng, GenerationParams};
pub use grid::HeightGrid;
pub use rng::TerrainRng;
