//! ASCII relief rendering for height grids.
//!
//! Provides two views:
//! - **Full** (1 character per cell) for small grids
//! - **Overview** (block-downsampled to a fixed side length) for terminals
//!
//! Maps are built on-demand from a `&HeightGrid`; elevations are normalized
//! against the grid's own min/max, so the ramp always spans the full range
//! of the rendered terrain.

use crate::grid::HeightGrid;

/// Shade ramp from lowest to highest elevation.
const RAMP: &[u8] = b" .:-=+*#%@";

// -----------------------------------------------------------------------
// Character encoding
// -----------------------------------------------------------------------

/// Map a normalized elevation in [0, 1] to a shade character.
///
/// Values outside [0, 1] clamp to the ramp ends.
pub fn elevation_char(normalized: f32) -> char {
    let clamped = normalized.clamp(0.0, 1.0);
    let idx = ((clamped * (RAMP.len() - 1) as f32).round() as usize).min(RAMP.len() - 1);
    RAMP[idx] as char
}

/// Normalization bounds for a grid. A flat grid maps everything to the
/// middle of the ramp rather than dividing by zero.
fn bounds(grid: &HeightGrid) -> (f32, f32) {
    (grid.min_elevation(), grid.max_elevation())
}

fn normalize(value: f32, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.5
    }
}

// -----------------------------------------------------------------------
// Full-resolution map
// -----------------------------------------------------------------------

/// Render the grid at full resolution, one character per cell.
pub fn render(grid: &HeightGrid) -> String {
    let size = grid.size();
    let (lo, hi) = bounds(grid);
    let mut out = String::with_capacity((size + 1) * size);
    for y in 0..size {
        for x in 0..size {
            out.push(elevation_char(normalize(grid.get(x, y), lo, hi)));
        }
        if y + 1 < size {
            out.push('\n');
        }
    }
    out
}

// -----------------------------------------------------------------------
// Overview map
// -----------------------------------------------------------------------

/// Render a downsampled overview at most `max_size` characters on a side.
///
/// Each character covers a `block x block` region and shows the region's
/// mean elevation. Grids no larger than `max_size` render at full
/// resolution.
pub fn render_overview(grid: &HeightGrid, max_size: usize) -> String {
    let size = grid.size();
    if max_size == 0 || size <= max_size {
        return render(grid);
    }

    let block = size.div_ceil(max_size);
    let cols = size.div_ceil(block);
    let (lo, hi) = bounds(grid);

    let mut out = String::with_capacity((cols + 1) * cols);
    for row in 0..cols {
        for col in 0..cols {
            let mean = block_mean(grid, col * block, row * block, block);
            out.push(elevation_char(normalize(mean, lo, hi)));
        }
        if row + 1 < cols {
            out.push('\n');
        }
    }
    out
}

/// Mean elevation of the `block x block` region starting at (gx, gy),
/// truncated at the grid edge.
fn block_mean(grid: &HeightGrid, gx: usize, gy: usize, block: usize) -> f32 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for dy in 0..block {
        for dx in 0..block {
            let x = gx + dx;
            let y = gy + dy;
            if grid.in_bounds(x, y) {
                sum += grid.get(x, y);
                count += 1;
            }
        }
    }
    sum / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_char_ramp_ends() {
        assert_eq!(elevation_char(0.0), ' ');
        assert_eq!(elevation_char(1.0), '@');
        assert_eq!(elevation_char(-2.0), ' ');
        assert_eq!(elevation_char(3.0), '@');
    }

    #[test]
    fn test_render_dimensions() {
        let grid = HeightGrid::new(5);
        let map = render(&grid);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
    }

    #[test]
    fn test_flat_grid_renders_mid_ramp() {
        let grid = HeightGrid::new(3);
        let map = render(&grid);
        let mid = elevation_char(0.5);
        assert!(map.chars().filter(|c| *c != '\n').all(|c| c == mid));
    }

    #[test]
    fn test_extremes_hit_ramp_ends() {
        let mut grid = HeightGrid::new(3);
        grid.set(0, 0, -4.0);
        grid.set(2, 2, 9.0);
        let map = render(&grid);
        assert!(map.contains(' '));
        assert!(map.contains('@'));
    }

    #[test]
    fn test_overview_downsamples() {
        let grid = HeightGrid::new(9);
        let map = render_overview(&grid, 3);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 3));
    }

    #[test]
    fn test_overview_passthrough_for_small_grids() {
        let grid = HeightGrid::new(5);
        assert_eq!(render_overview(&grid, 64), render(&grid));
    }
}
