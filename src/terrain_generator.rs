//! Diamond-square heightfield generation.
//!
//! Heights are built by seeding the four grid corners with random values and
//! then refining interior vertices pass by pass: each pass sets cell centers
//! from their four diagonal corners (diamond phase), then the edge midpoints
//! around each center from their already-set neighbors (square phase), with a
//! random perturbation whose amplitude halves every pass.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CORNER_HEIGHT_MAX, CORNER_HEIGHT_MIN};
use crate::heightfield::TerrainGrid;

/// Configuration for terrain generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Cells per axis. Must be a power of two: the refinement halves the step
    /// size each pass and needs integer midpoints.
    pub div: usize,
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    /// Initial perturbation amplitude, halved after each refinement pass.
    pub roughness: f32,
    pub seed: u64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            div: 64,
            min_x: -5.0,
            max_x: 5.0,
            min_y: -5.0,
            max_y: 5.0,
            roughness: 0.3,
            seed: 42,
        }
    }
}

impl TerrainConfig {
    /// Check the divisions constraint without building anything.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.div == 0 || !self.div.is_power_of_two() {
            return Err(TerrainError::InvalidDivisions { div: self.div });
        }
        Ok(())
    }
}

/// Errors from terrain construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// The grid division count cannot drive the midpoint refinement.
    #[error("grid divisions must be a positive power of two, got {div}")]
    InvalidDivisions { div: usize },
}

/// Fill in the grid heights with the diamond-square algorithm.
///
/// The grid's x/y lattice is left untouched; only z values are written. The
/// caller is responsible for recomputing normals afterwards.
pub fn generate_heights(grid: &mut TerrainGrid, roughness: f32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let div = grid.div;

    // Seed the four corners.
    for (i, j) in [(0, 0), (0, div), (div, 0), (div, div)] {
        grid.set_height(i, j, rng.gen_range(CORNER_HEIGHT_MIN..CORNER_HEIGHT_MAX));
    }

    let mut amplitude = roughness;
    let mut step = div;
    while step > 1 {
        let half = step / 2;

        // Diamond phase: cell centers from their four diagonal corners.
        for i in (half..=div).step_by(step) {
            for j in (half..=div).step_by(step) {
                let avg = (grid.height(i - half, j - half)
                    + grid.height(i - half, j + half)
                    + grid.height(i + half, j - half)
                    + grid.height(i + half, j + half))
                    / 4.0;
                grid.set_height(i, j, avg + perturb(&mut rng, amplitude));
            }
        }

        // Square phase: the four edge midpoints around each diamond center.
        // Midpoints on the grid boundary have only three set neighbors; the
        // fourth would lie one full step outside the grid.
        for i in (half..=div).step_by(step) {
            for j in (half..=div).step_by(step) {
                square_point(grid, &mut rng, amplitude, i - half, j, half);
                square_point(grid, &mut rng, amplitude, i + half, j, half);
                square_point(grid, &mut rng, amplitude, i, j - half, half);
                square_point(grid, &mut rng, amplitude, i, j + half, half);
            }
        }

        amplitude /= 2.0;
        step = half;
    }
}

/// Set one square-phase midpoint at (i, j) from its axis-aligned neighbors
/// at distance `half`. Neighbors that fall outside the grid (boundary
/// midpoints) are skipped, leaving the 3-neighbor average.
fn square_point(
    grid: &mut TerrainGrid,
    rng: &mut StdRng,
    amplitude: f32,
    i: usize,
    j: usize,
    half: usize,
) {
    let div = grid.div;
    let h = half as isize;
    let mut sum = 0.0;
    let mut count = 0u32;

    for (di, dj) in [(-h, 0), (h, 0), (0, -h), (0, h)] {
        let ni = i as isize + di;
        let nj = j as isize + dj;
        if ni < 0 || nj < 0 || ni > div as isize || nj > div as isize {
            continue;
        }
        sum += grid.height(ni as usize, nj as usize);
        count += 1;
    }

    let avg = sum / count as f32;
    grid.set_height(i, j, avg + perturb(rng, amplitude));
}

#[inline]
fn perturb(rng: &mut StdRng, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}
