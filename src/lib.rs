//! Fractal terrain geometry and bounded particle simulation.
//!
//! Two independent subsystems:
//!
//! - **Terrain**: a diamond-square heightfield on a regular lattice, with
//!   per-vertex averaged normals and triangle/wireframe index buffers, ready
//!   for vertex-buffer upload by an external renderer.
//! - **Particles**: point masses in a cubic domain with drag, gravity, and
//!   exact time-of-impact wall bounces, stepped once per animation tick.
//!
//! # Example
//!
//! ```
//! use terrasim::{MeshIndices, ParticleSystem, TerrainConfig, TerrainGrid};
//!
//! let config = TerrainConfig {
//!     div: 8,
//!     ..Default::default()
//! };
//! let terrain = TerrainGrid::generate(&config).unwrap();
//! let mesh = MeshIndices::build(config.div);
//! assert_eq!(terrain.vertex_count(), 81);
//! assert_eq!(mesh.triangle_count(), 2 * 8 * 8);
//!
//! let mut system = ParticleSystem::with_seed(1);
//! system.add_batch();
//! system.step_frame();
//! assert_eq!(system.len(), 3);
//! ```

pub mod constants;
pub mod heightfield;
pub mod mesh;
pub mod normals;
pub mod particle;
pub mod serde_utils;
pub mod simulation;
pub mod terrain_generator;

pub use heightfield::TerrainGrid;
pub use mesh::MeshIndices;
pub use normals::{compute_normals, Corner, Edge, VertexTopology};
pub use particle::Particle;
pub use simulation::{ParticleSystem, SimParams};
pub use terrain_generator::{generate_heights, TerrainConfig, TerrainError};
