//! Per-vertex normal estimation for the triangulated terrain grid.
//!
//! Every vertex classifies into one of eight topological cases: four corners,
//! four edges, or the interior. Each case has a fixed ring of neighbor
//! offsets, listed counter-clockwise when viewed from +Z. Consecutive ring
//! entries span one incident triangle; the cross product of the two edge
//! vectors gives that face's normal. Interior rings wrap around (six faces),
//! boundary rings are open fans (ring length minus one faces).

use glam::Vec3;

use crate::heightfield::TerrainGrid;

/// Topological class of a grid vertex, determining its incident faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexTopology {
    Corner(Corner),
    Edge(Edge),
    Interior,
}

/// The four grid corners. The two corners not touched by cell diagonals have
/// a single incident face; the other two have two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// (i, j) = (0, 0)
    BottomLeft,
    /// (i, j) = (0, div)
    BottomRight,
    /// (i, j) = (div, 0)
    TopLeft,
    /// (i, j) = (div, div)
    TopRight,
}

/// The four grid edges, corners excluded. Three incident faces each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// i = 0
    Bottom,
    /// i = div
    Top,
    /// j = 0
    Left,
    /// j = div
    Right,
}

impl VertexTopology {
    /// Classify vertex (i, j) on a grid with `div` cells per axis.
    pub fn classify(i: usize, j: usize, div: usize) -> Self {
        match (i == 0, i == div, j == 0, j == div) {
            (true, _, true, _) => Self::Corner(Corner::BottomLeft),
            (true, _, _, true) => Self::Corner(Corner::BottomRight),
            (_, true, true, _) => Self::Corner(Corner::TopLeft),
            (_, true, _, true) => Self::Corner(Corner::TopRight),
            (true, _, _, _) => Self::Edge(Edge::Bottom),
            (_, true, _, _) => Self::Edge(Edge::Top),
            (_, _, true, _) => Self::Edge(Edge::Left),
            (_, _, _, true) => Self::Edge(Edge::Right),
            _ => Self::Interior,
        }
    }

    /// Neighbor ring as (di, dj) offsets, counter-clockwise from +Z, matching
    /// the triangle winding of [`MeshIndices`](crate::mesh::MeshIndices).
    pub fn neighbor_ring(&self) -> &'static [(isize, isize)] {
        match self {
            Self::Corner(Corner::BottomLeft) => &[(0, 1), (1, 0)],
            Self::Corner(Corner::BottomRight) => &[(1, 0), (1, -1), (0, -1)],
            Self::Corner(Corner::TopLeft) => &[(-1, 0), (-1, 1), (0, 1)],
            Self::Corner(Corner::TopRight) => &[(0, -1), (-1, 0)],
            Self::Edge(Edge::Bottom) => &[(0, 1), (1, 0), (1, -1), (0, -1)],
            Self::Edge(Edge::Top) => &[(0, -1), (-1, 0), (-1, 1), (0, 1)],
            Self::Edge(Edge::Left) => &[(-1, 0), (-1, 1), (0, 1), (1, 0)],
            Self::Edge(Edge::Right) => &[(1, 0), (1, -1), (0, -1), (-1, 0)],
            Self::Interior => &[(0, 1), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1)],
        }
    }

    /// Whether the ring wraps (interior vertices sit on a closed fan of six
    /// faces; boundary vertices on an open fan).
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Interior)
    }

    /// Number of incident triangles.
    pub fn face_count(&self) -> usize {
        let ring = self.neighbor_ring();
        if self.is_closed() {
            ring.len()
        } else {
            ring.len() - 1
        }
    }
}

/// Recompute every vertex normal from the current heights.
///
/// The accumulated face normals are averaged over the incident face count and
/// normalized. A degenerate accumulation (zero-length sum, possible only for
/// pathological height data) falls back to +Z instead of emitting NaN.
pub fn compute_normals(grid: &mut TerrainGrid) {
    let div = grid.div;
    let mut degenerate = 0usize;

    for i in 0..=div {
        for j in 0..=div {
            let topology = VertexTopology::classify(i, j, div);
            let normal = vertex_normal(grid, i, j, topology);

            let idx = grid.idx(i, j);
            grid.normals[idx] = match normal {
                Some(n) => n,
                None => {
                    degenerate += 1;
                    Vec3::Z
                }
            };
        }
    }

    if degenerate > 0 {
        log::warn!(
            "{} degenerate vertex normals replaced with +Z",
            degenerate
        );
    }
}

/// Average the face normals around vertex (i, j). Returns `None` when the
/// accumulated normal has no usable direction.
fn vertex_normal(
    grid: &TerrainGrid,
    i: usize,
    j: usize,
    topology: VertexTopology,
) -> Option<Vec3> {
    let origin = grid.vertex(i, j);
    let ring = topology.neighbor_ring();

    let edge = |&(di, dj): &(isize, isize)| -> Vec3 {
        let ni = (i as isize + di) as usize;
        let nj = (j as isize + dj) as usize;
        grid.vertex(ni, nj) - origin
    };

    let mut sum = Vec3::ZERO;
    for pair in ring.windows(2) {
        sum += edge(&pair[0]).cross(edge(&pair[1]));
    }
    if topology.is_closed() {
        sum += edge(ring.last().unwrap()).cross(edge(&ring[0]));
    }

    let averaged = sum / topology.face_count() as f32;
    let normal = averaged.normalize_or_zero();
    if normal == Vec3::ZERO {
        None
    } else {
        Some(normal)
    }
}
