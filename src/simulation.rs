//! Particle simulation with exact wall-collision resolution.
//!
//! Particles live in a cubic domain with walls at `±params.wall` on every
//! axis. Each step applies drag and gravity to the velocity, then advances
//! the position by repeatedly finding the nearest wall along the current
//! velocity, advancing exactly to it, and reflecting the hit axis, until the
//! frame's time budget is spent. A particle can therefore bounce off several
//! walls within a single frame without tunnelling.

use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{DRAG_BASE, FRAME_DT, GRAVITY, SPAWN_BATCH, WALL_OFFSET};
use crate::particle::Particle;

/// Tunable simulation parameters. Defaults reproduce the classic demo:
/// 0.8^dt drag, gravity 10 on -y, walls at ±0.9.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimParams {
    /// Per-second velocity retention base; 1.0 disables drag.
    pub drag_base: f32,
    /// Gravity acceleration magnitude along -y; 0.0 disables gravity.
    pub gravity: f32,
    /// Wall distance from the origin on each axis.
    pub wall: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            drag_base: DRAG_BASE,
            gravity: GRAVITY,
            wall: WALL_OFFSET,
        }
    }
}

/// Which wall a particle hits first during a sub-step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wall {
    XPos,
    XNeg,
    YPos,
    YNeg,
    ZPos,
    ZNeg,
}

impl Wall {
    const ALL: [Wall; 6] = [
        Wall::XPos,
        Wall::XNeg,
        Wall::YPos,
        Wall::YNeg,
        Wall::ZPos,
        Wall::ZNeg,
    ];

    /// Outward direction of this wall: +1 or -1 on its axis.
    fn sign(self) -> f32 {
        match self {
            Wall::XPos | Wall::YPos | Wall::ZPos => 1.0,
            Wall::XNeg | Wall::YNeg | Wall::ZNeg => -1.0,
        }
    }

    /// Signed wall coordinate on this wall's axis.
    fn coordinate(self, offset: f32) -> f32 {
        self.sign() * offset
    }

    /// Index of the axis this wall bounds.
    fn axis(self) -> usize {
        match self {
            Wall::XPos | Wall::XNeg => 0,
            Wall::YPos | Wall::YNeg => 1,
            Wall::ZPos | Wall::ZNeg => 2,
        }
    }
}

/// Owns the particle collection and drives the per-frame physics.
pub struct ParticleSystem {
    pub params: SimParams,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create an empty system with default parameters and an entropy seed.
    pub fn new() -> Self {
        Self {
            params: SimParams::default(),
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an empty system with a fixed seed for reproducible spawns.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            params: SimParams::default(),
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawn a batch of three particles with position components uniform in
    /// [0, 0.9) and velocity components uniform in [0, 1).
    pub fn add_batch(&mut self) {
        for _ in 0..SPAWN_BATCH {
            let position = Vec3::new(
                self.rng.gen_range(0.0..WALL_OFFSET),
                self.rng.gen_range(0.0..WALL_OFFSET),
                self.rng.gen_range(0.0..WALL_OFFSET),
            );
            let velocity = Vec3::new(
                self.rng.gen_range(0.0..1.0),
                self.rng.gen_range(0.0..1.0),
                self.rng.gen_range(0.0..1.0),
            );
            self.particles.push(Particle::new(position, velocity));
        }
        log::debug!("spawned {} particles, {} total", SPAWN_BATCH, self.len());
    }

    /// Push an explicit particle (tests and custom emitters).
    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the system holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particle state for the renderer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one 60 Hz frame.
    pub fn step_frame(&mut self) {
        self.step(FRAME_DT);
    }

    /// Advance every particle by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let params = self.params;
        for particle in &mut self.particles {
            integrate(particle, &params, dt);
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply drag and gravity, then resolve motion against the walls until the
/// time budget is spent.
fn integrate(particle: &mut Particle, params: &SimParams, dt: f32) {
    particle.velocity *= params.drag_base.powf(dt);
    particle.velocity.y -= params.gravity * dt;

    let mut remaining = dt;
    while remaining > 0.0 {
        match nearest_wall(particle, params.wall) {
            Some((wall, t)) if t < remaining => {
                particle.position += particle.velocity * t;
                // Snap the hit axis exactly onto the wall plane. Rounding in
                // the advance above can overshoot the wall by an ulp, and a
                // particle left outside would see a spurious re-hit of the
                // same plane flip its velocity back outward.
                let axis = wall.axis();
                particle.position[axis] = wall.coordinate(params.wall);
                particle.velocity[axis] = -particle.velocity[axis];
                remaining -= t;
            }
            _ => {
                particle.position += particle.velocity * remaining;
                remaining = 0.0;
            }
        }
    }
}

/// Find the wall the particle reaches soonest along its current velocity.
///
/// A zero velocity component yields a non-finite impact time, which discards
/// that axis: the wall is unreachable, not an error. A particle sitting on
/// (or past) a wall while moving outward gets an immediate zero-time hit,
/// since the ray test alone would discard that wall and let it escape.
/// Returns `None` when no wall lies ahead.
fn nearest_wall(particle: &Particle, offset: f32) -> Option<(Wall, f32)> {
    let mut best: Option<(Wall, f32)> = None;

    for wall in Wall::ALL {
        let axis = wall.axis();
        let coord = wall.coordinate(offset);
        let pos = particle.position[axis];
        let vel = particle.velocity[axis];

        let escaping = vel * wall.sign() > 0.0 && (pos - coord) * wall.sign() >= 0.0;
        let t = if escaping {
            0.0
        } else {
            let t = (coord - pos) / vel;
            if !t.is_finite() || t <= 0.0 {
                continue;
            }
            t
        };

        if best.map_or(true, |(_, bt)| t < bt) {
            best = Some((wall, t));
        }
    }

    best
}
