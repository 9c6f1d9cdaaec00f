//! Point-mass particle for the bounded bounce simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::serde_utils;

/// A single particle: position and velocity, both mutated every step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Particle {
    /// World position of the particle center.
    #[serde(with = "serde_utils::vec3")]
    pub position: Vec3,
    /// Current velocity.
    #[serde(with = "serde_utils::vec3")]
    pub velocity: Vec3,
}

impl Particle {
    /// Create a particle with the given position and velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Create a stationary particle.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}
