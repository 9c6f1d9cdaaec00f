//! Triangle and wireframe index construction for the terrain grid.

/// Index buffers describing the grid triangulation.
///
/// Deterministic function of the division count: two triangles per cell, with
/// the shared diagonal running from a cell's top-left to bottom-right vertex.
/// The edge list carries all three edges of every triangle; edges shared by
/// adjacent triangles appear twice, which is what line-list rendering expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshIndices {
    /// Flat triangle list, three vertex indices per triangle.
    pub triangles: Vec<u32>,
    /// Flat edge list, two vertex indices per edge.
    pub edges: Vec<u32>,
}

impl MeshIndices {
    /// Build index buffers for a grid with `div` cells per axis.
    pub fn build(div: usize) -> Self {
        let triangles = build_triangles(div);
        let edges = build_edges(&triangles);
        Self { triangles, edges }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of edge entries (three per triangle, duplicates included).
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}

/// Emit two counter-clockwise triangles per grid cell.
fn build_triangles(div: usize) -> Vec<u32> {
    let row = (div + 1) as u32;
    let mut indices = Vec::with_capacity(div * div * 6);

    for i in 0..div as u32 {
        for j in 0..div as u32 {
            let v = i * row + j;
            indices.extend_from_slice(&[v, v + 1, v + row]);
            indices.extend_from_slice(&[v + 1, v + 1 + row, v + row]);
        }
    }
    indices
}

/// Expand a triangle list into a line list, one index pair per triangle edge.
fn build_edges(triangles: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(3) {
        edges.extend_from_slice(&[tri[0], tri[1]]);
        edges.extend_from_slice(&[tri[1], tri[2]]);
        edges.extend_from_slice(&[tri[2], tri[0]]);
    }
    edges
}
