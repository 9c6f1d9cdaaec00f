//! Headless demo: generate a terrain, build its index buffers, and run the
//! particle system for a few simulated seconds, printing summary stats.
//!
//! Run with `RUST_LOG=info cargo run --example terrain_dump`.

use terrasim::{MeshIndices, ParticleSystem, TerrainConfig, TerrainGrid};

fn main() {
    env_logger::init();

    let config = TerrainConfig {
        div: 64,
        roughness: 0.4,
        ..Default::default()
    };
    let terrain = match TerrainGrid::generate(&config) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("terrain generation failed: {err}");
            std::process::exit(1);
        }
    };
    let mesh = MeshIndices::build(config.div);

    let min = terrain.positions.iter().map(|p| p.z).fold(f32::MAX, f32::min);
    let max = terrain.positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
    println!(
        "terrain: {} vertices, {} triangles, {} wireframe edges",
        terrain.vertex_count(),
        mesh.triangle_count(),
        mesh.edge_count()
    );
    println!("height range: {min:.3} .. {max:.3}");

    let mut system = ParticleSystem::with_seed(config.seed);
    for _ in 0..5 {
        system.add_batch();
    }
    for _ in 0..300 {
        system.step_frame();
    }

    let mean_height: f32 = system
        .particles()
        .iter()
        .map(|p| p.position.y)
        .sum::<f32>()
        / system.len() as f32;
    println!(
        "particles: {} after 5s, mean height {mean_height:.3}",
        system.len()
    );
}
