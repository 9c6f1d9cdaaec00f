//! Vertex grid for fractal heightfield terrain.

use glam::Vec3;

use crate::normals::compute_normals;
use crate::terrain_generator::{generate_heights, TerrainConfig, TerrainError};

/// A square (div+1) x (div+1) grid of terrain vertices with per-vertex
/// normals.
///
/// The grid lies on a regular x/y lattice spanning the configured extent;
/// only the z component (height) and the normals change after construction.
/// Row index `i` walks the y axis, column index `j` the x axis, and vertices
/// are stored row-major.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    /// Number of cells along each axis. Vertex count per axis is `div + 1`.
    pub div: usize,
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl TerrainGrid {
    /// Generate a terrain grid from the given configuration: lattice layout,
    /// diamond-square heights, then per-vertex normals.
    pub fn generate(config: &TerrainConfig) -> Result<Self, TerrainError> {
        let mut grid = Self::flat(config)?;
        generate_heights(&mut grid, config.roughness, config.seed);
        compute_normals(&mut grid);
        log::info!(
            "generated terrain: div={} ({} vertices)",
            grid.div,
            grid.vertex_count()
        );
        Ok(grid)
    }

    /// Lay out the flat lattice with z = 0 and +Z normals.
    pub fn flat(config: &TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;

        let div = config.div;
        let side = div + 1;
        let dx = (config.max_x - config.min_x) / div as f32;
        let dy = (config.max_y - config.min_y) / div as f32;

        let mut positions = Vec::with_capacity(side * side);
        for i in 0..side {
            for j in 0..side {
                positions.push(Vec3::new(
                    config.min_x + dx * j as f32,
                    config.min_y + dy * i as f32,
                    0.0,
                ));
            }
        }

        Ok(Self {
            div,
            min_x: config.min_x,
            max_x: config.max_x,
            min_y: config.min_y,
            max_y: config.max_y,
            normals: vec![Vec3::Z; side * side],
            positions,
        })
    }

    /// Re-roll the heights and normals in place on the existing lattice.
    pub fn regenerate(&mut self, roughness: f32, seed: u64) {
        for p in &mut self.positions {
            p.z = 0.0;
        }
        generate_heights(self, roughness, seed);
        compute_normals(self);
        log::info!("regenerated terrain: div={} seed={}", self.div, seed);
    }

    /// Flat index of vertex (i, j).
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.div + 1) + j
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        (self.div + 1) * (self.div + 1)
    }

    /// Position of vertex (i, j).
    #[inline]
    pub fn vertex(&self, i: usize, j: usize) -> Vec3 {
        self.positions[self.idx(i, j)]
    }

    /// Height (z) at vertex (i, j).
    #[inline]
    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.positions[self.idx(i, j)].z
    }

    /// Set the height (z) at vertex (i, j).
    #[inline]
    pub fn set_height(&mut self, i: usize, j: usize, height: f32) {
        let idx = self.idx(i, j);
        self.positions[idx].z = height;
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]` for vertex buffer
    /// upload.
    pub fn position_array(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| p.to_array())
            .collect()
    }

    /// Normals flattened to `[nx0, ny0, nz0, nx1, ...]` for vertex buffer
    /// upload.
    pub fn normal_array(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }
}
