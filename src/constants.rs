//! Shared constants for terrain generation and the particle simulation.

/// Gravity acceleration magnitude (m/s^2), applied along negative Y.
pub const GRAVITY: f32 = 10.0;

/// Per-second velocity retention factor. Each step scales velocity by
/// `DRAG_BASE.powf(dt)`.
pub const DRAG_BASE: f32 = 0.8;

/// Half-extent of the cubic simulation domain.
pub const DOMAIN_HALF_EXTENT: f32 = 1.0;

/// Radius of a simulated particle.
pub const PARTICLE_RADIUS: f32 = 0.1;

/// Effective wall offset seen by particle centers: the domain half-extent
/// shrunk by the particle radius.
pub const WALL_OFFSET: f32 = DOMAIN_HALF_EXTENT - PARTICLE_RADIUS;

/// Default simulation tick, one frame at 60 Hz.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Particles spawned per [`add_batch`](crate::ParticleSystem::add_batch) call.
pub const SPAWN_BATCH: usize = 3;

/// Lower bound of the random corner height seeding diamond-square.
pub const CORNER_HEIGHT_MIN: f32 = 1.0 / 50.0;

/// Upper bound of the random corner height seeding diamond-square.
pub const CORNER_HEIGHT_MAX: f32 = 11.0 / 50.0;
