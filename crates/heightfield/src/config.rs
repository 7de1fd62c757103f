/// Default grid size (2^8 + 1). Must stay of the form 2^k + 1.
pub const DEFAULT_GRID_SIZE: usize = 257;

/// Smallest valid grid size (2^1 + 1).
pub const MIN_GRID_SIZE: usize = 3;

pub const DEFAULT_MIN_ELEVATION: f32 = 0.0;
pub const DEFAULT_MAX_ELEVATION: f32 = 1.0;

/// Unitless multiplier on midpoint-displacement noise amplitude.
pub const DEFAULT_ROUGHNESS: f32 = 0.55;

/// Seed 0 selects an entropy-seeded random sequence; any nonzero value is
/// deterministic.
pub const DEFAULT_SEED: u64 = 0;

/// Side length of the block-downsampled ASCII overview map.
pub const OVERVIEW_SIZE: usize = 64;
