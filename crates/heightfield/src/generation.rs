//! Midpoint-displacement (diamond-square) height-field synthesis.
//!
//! Produces a square grid of elevation values from a seed, an elevation
//! range, and a roughness multiplier. Noise amplitude decays linearly with
//! step size, so coarse structure dominates and fine detail is subtler.
//! Generation is a single-shot pure computation: each call owns its grid
//! and random sequence exclusively, so concurrent calls with separate
//! parameters need no synchronization.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ELEVATION, DEFAULT_MIN_ELEVATION, DEFAULT_ROUGHNESS,
    DEFAULT_SEED, MIN_GRID_SIZE,
};
use crate::error::TerrainError;
use crate::grid::HeightGrid;
use crate::rng::TerrainRng;

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

/// Parameters for one generation call. Consumed entirely during generation;
/// nothing is retained afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Grid side length; must be 2^k + 1 for k >= 1.
    pub size: usize,
    /// PRNG seed. `0` selects an entropy-seeded sequence.
    pub seed: u64,
    pub min_value: f32,
    pub max_value: f32,
    /// Unitless noise multiplier; `0.0` yields a surface with no randomness
    /// beyond the four corner values.
    pub roughness: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: DEFAULT_SEED,
            min_value: DEFAULT_MIN_ELEVATION,
            max_value: DEFAULT_MAX_ELEVATION,
            roughness: DEFAULT_ROUGHNESS,
        }
    }
}

impl GenerationParams {
    /// Check the parameter contract. Runs before any allocation or random
    /// draw; generation is all-or-nothing.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.size < MIN_GRID_SIZE || !(self.size - 1).is_power_of_two() {
            return Err(TerrainError::InvalidSize { size: self.size });
        }
        if !(self.min_value < self.max_value) {
            return Err(TerrainError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if !(self.roughness >= 0.0 && self.roughness.is_finite()) {
            return Err(TerrainError::InvalidRoughness {
                roughness: self.roughness,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generation entry points
// ---------------------------------------------------------------------------

/// Generate a height field, deriving the PRNG from `params.seed`.
///
/// Identical nonzero seed and parameters reproduce a bit-identical grid.
pub fn generate(params: &GenerationParams) -> Result<HeightGrid, TerrainError> {
    params.validate()?;
    let mut rng = TerrainRng::from_seed_u64(params.seed);
    generate_with_rng(params, &mut rng.0)
}

/// Generate a height field drawing from a caller-supplied RNG.
///
/// `params.seed` is ignored here; the caller controls determinism and
/// thread placement through the RNG it passes in.
pub fn generate_with_rng<R: Rng>(
    params: &GenerationParams,
    rng: &mut R,
) -> Result<HeightGrid, TerrainError> {
    params.validate()?;
    debug!(
        size = params.size,
        seed = params.seed,
        roughness = params.roughness,
        "generating height field"
    );

    let size = params.size;
    let s = size - 1;
    let span = params.max_value - params.min_value;
    let mut grid = HeightGrid::new(size);

    // Corner cells are exact uniform draws in [min_value, max_value].
    for (x, y) in [(0, 0), (s, 0), (0, s), (s, s)] {
        grid.set(x, y, rng.gen_range(params.min_value..=params.max_value));
    }

    let mut step = s;
    while step > 1 {
        let amplitude = span * params.roughness * (step as f32 / s as f32);
        diamond_pass(&mut grid, step, amplitude, rng);
        square_pass(&mut grid, step, amplitude, rng);
        step /= 2;
    }

    Ok(grid)
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Set the center of every `step x step` sub-square to the average of its
/// four corners plus a noise offset.
fn diamond_pass<R: Rng>(grid: &mut HeightGrid, step: usize, amplitude: f32, rng: &mut R) {
    let s = grid.size() - 1;
    let half = step / 2;
    for y in (0..s).step_by(step) {
        for x in (0..s).step_by(step) {
            let avg = (grid.get(x, y)
                + grid.get(x + step, y)
                + grid.get(x, y + step)
                + grid.get(x + step, y + step))
                / 4.0;
            grid.set(x + half, y + half, avg + displace(rng, amplitude));
        }
    }
}

/// Set every edge midpoint of every `step x step` sub-square to the average
/// of its already-computed diamond neighbors plus a noise offset. Boundary
/// midpoints average 3 neighbors (the off-grid side is omitted, not wrapped
/// or reflected).
fn square_pass<R: Rng>(grid: &mut HeightGrid, step: usize, amplitude: f32, rng: &mut R) {
    let size = grid.size();
    let half = step / 2;
    for y in (0..size).step_by(half) {
        // Rows aligned with sub-square corners hold midpoints of horizontal
        // edges; the rows between hold midpoints of vertical edges.
        let x0 = if (y / half) % 2 == 0 { half } else { 0 };
        for x in (x0..size).step_by(step) {
            let avg = diamond_average(grid, x, y, half);
            grid.set(x, y, avg + displace(rng, amplitude));
        }
    }
}

/// Average the up-to-4 neighbors at distance `half` in the cardinal
/// directions, skipping any that fall outside the grid.
fn diamond_average(grid: &HeightGrid, x: usize, y: usize, half: usize) -> f32 {
    let size = grid.size();
    let mut sum = 0.0;
    let mut count = 0u32;
    if x >= half {
        sum += grid.get(x - half, y);
        count += 1;
    }
    if x + half < size {
        sum += grid.get(x + half, y);
        count += 1;
    }
    if y >= half {
        sum += grid.get(x, y - half);
        count += 1;
    }
    if y + half < size {
        sum += grid.get(x, y + half);
        count += 1;
    }
    sum / count as f32
}

/// Uniform noise in [-amplitude, +amplitude]. Zero amplitude makes no draw,
/// so a roughness-0 run consumes exactly the four corner draws.
fn displace<R: Rng>(rng: &mut R, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.gen_range(-amplitude..=amplitude)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
