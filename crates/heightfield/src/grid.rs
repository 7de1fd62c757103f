//! Square elevation grid.
//!
//! A `HeightGrid` is a fresh, single-owner buffer produced by one generation
//! call; it has no identity beyond that call and no update-in-place API
//! besides `set` (used during generation and by callers that post-process).

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Square grid of elevation values, stored row-major in a flat vec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bitcode::Encode, bitcode::Decode)]
pub struct HeightGrid {
    values: Vec<f32>,
    size: usize,
}

impl HeightGrid {
    /// Create a zero-filled `size x size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![0.0; size * size],
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.values[idx] = value;
    }

    /// All elevation values, row-major.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Lowest elevation in the grid.
    pub fn min_elevation(&self) -> f32 {
        self.values.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Highest elevation in the grid.
    pub fn max_elevation(&self) -> f32 {
        self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Encode the grid to a compact byte snapshot.
    pub fn to_bytes(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    /// Decode a grid from a byte snapshot produced by [`HeightGrid::to_bytes`].
    ///
    /// Rejects snapshots whose value count does not match the stored size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TerrainError> {
        let grid: HeightGrid =
            bitcode::decode(bytes).map_err(|e| TerrainError::Decode(e.to_string()))?;
        if grid.values.len() != grid.size * grid.size {
            return Err(TerrainError::Decode(format!(
                "value count {} does not match size {}",
                grid.values.len(),
                grid.size
            )));
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let grid = HeightGrid::new(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.values().len(), 25);
        assert!(grid.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = HeightGrid::new(9);
        grid.set(3, 7, 0.42);
        assert_eq!(grid.get(3, 7), 0.42);
        assert_eq!(grid.get(7, 3), 0.0);
        assert_eq!(grid.index(3, 7), 7 * 9 + 3);
    }

    #[test]
    fn test_in_bounds() {
        let grid = HeightGrid::new(5);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 4));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, 5));
    }

    #[test]
    fn test_min_max_elevation() {
        let mut grid = HeightGrid::new(3);
        grid.set(0, 0, -1.5);
        grid.set(2, 2, 3.25);
        assert_eq!(grid.min_elevation(), -1.5);
        assert_eq!(grid.max_elevation(), 3.25);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut grid = HeightGrid::new(5);
        for y in 0..5 {
            for x in 0..5 {
                grid.set(x, y, (y * 5 + x) as f32 * 0.1);
            }
        }
        let bytes = grid.to_bytes();
        let restored = HeightGrid::from_bytes(&bytes).expect("snapshot should decode");
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_corrupt_snapshot_rejected() {
        let bytes = HeightGrid::new(5).to_bytes();
        let truncated = &bytes[..bytes.len() / 2];
        assert!(matches!(
            HeightGrid::from_bytes(truncated),
            Err(TerrainError::Decode(_))
        ));
    }
}
