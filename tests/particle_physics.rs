//! Particle simulation test suite.
//!
//! Verifies spawn/clear bookkeeping, the drag/gravity integration, and exact
//! wall-collision behavior. Deterministic and headless.

use glam::Vec3;
use terrasim::constants::WALL_OFFSET;
use terrasim::{Particle, ParticleSystem, SimParams};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// A system with drag and gravity disabled, for pure-collision checks.
fn frictionless_system() -> ParticleSystem {
    let mut system = ParticleSystem::with_seed(7);
    system.params = SimParams {
        drag_base: 1.0,
        gravity: 0.0,
        ..Default::default()
    };
    system
}

fn inside_domain(p: &Particle) -> bool {
    p.position
        .abs()
        .cmple(Vec3::splat(WALL_OFFSET + 1e-5))
        .all()
}

// =============================================================================
// SPAWN AND CLEAR
// =============================================================================

#[test]
fn add_batch_spawns_three_in_range() {
    let mut system = ParticleSystem::with_seed(1);
    system.add_batch();
    assert_eq!(system.len(), 3);

    for p in system.particles() {
        for axis in 0..3 {
            assert!(p.position[axis] >= 0.0 && p.position[axis] < WALL_OFFSET);
            assert!(p.velocity[axis] >= 0.0 && p.velocity[axis] < 1.0);
        }
    }
}

#[test]
fn batches_accumulate_and_clear_empties() {
    let mut system = ParticleSystem::with_seed(2);
    for _ in 0..4 {
        system.add_batch();
    }
    assert_eq!(system.len(), 12);

    system.clear();
    assert!(system.is_empty());

    // Clear on an empty system is a no-op.
    system.clear();
    assert_eq!(system.len(), 0);
}

#[test]
fn seeded_spawns_are_reproducible() {
    let mut a = ParticleSystem::with_seed(99);
    let mut b = ParticleSystem::with_seed(99);
    a.add_batch();
    b.add_batch();
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
    }
}

// =============================================================================
// INTEGRATION: DRAG AND GRAVITY
// =============================================================================

#[test]
fn resting_particle_stays_at_center_without_forces() {
    let mut system = frictionless_system();
    system.spawn(Particle::at(Vec3::ZERO));

    for _ in 0..1000 {
        system.step_frame();
    }
    assert_eq!(system.particles()[0].position, Vec3::ZERO);
}

#[test]
fn drag_slows_horizontal_motion() {
    let mut system = ParticleSystem::with_seed(3);
    system.params.gravity = 0.0;
    system.spawn(Particle::new(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)));

    system.step(1.0);
    let v = system.particles()[0].velocity;
    // One second of 0.8^dt drag scales speed by exactly 0.8.
    assert!((v.x - 0.4).abs() < 1e-6);
}

#[test]
fn gravity_pulls_particles_down() {
    let mut system = ParticleSystem::with_seed(4);
    system.spawn(Particle::at(Vec3::ZERO));
    system.step_frame();

    let p = system.particles()[0];
    assert!(p.velocity.y < 0.0);
    assert!(p.position.y < 0.0);
}

#[test]
fn dropped_particle_settles_near_the_floor() {
    let mut system = ParticleSystem::with_seed(5);
    system.spawn(Particle::at(Vec3::ZERO));

    // Several simulated seconds of drag plus bouncing bleeds off energy.
    for _ in 0..600 {
        system.step_frame();
    }
    let p = system.particles()[0];
    assert!(p.position.y >= -WALL_OFFSET - 1e-5);
    assert!(p.position.y < -WALL_OFFSET + 0.2);
}

// =============================================================================
// EXACT COLLISION RESOLUTION
// =============================================================================

#[test]
fn exact_bounce_conserves_distance() {
    let mut system = frictionless_system();
    system.spawn(Particle::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)));

    // dt = 1.08 covers 0.9 up to the wall plus 0.18 back down.
    system.step(1.08);
    let p = system.particles()[0];
    assert!((p.position.y - 0.72).abs() < 1e-5);
    assert!((p.velocity.y + 1.0).abs() < 1e-6);
}

#[test]
fn bounce_does_not_lose_speed() {
    let mut system = frictionless_system();
    system.spawn(Particle::new(
        Vec3::new(0.2, -0.3, 0.4),
        Vec3::new(1.3, -0.7, 2.1),
    ));
    let speed = system.particles()[0].velocity.length();

    for _ in 0..240 {
        system.step_frame();
    }
    let after = system.particles()[0].velocity.length();
    assert!((after - speed).abs() < 1e-4);
}

#[test]
fn containment_over_many_frames() {
    let mut system = frictionless_system();
    system.add_batch();
    system.add_batch();

    for _ in 0..2000 {
        system.step_frame();
        for p in system.particles() {
            assert!(inside_domain(p), "escaped: {:?}", p.position);
        }
    }
}

#[test]
fn containment_under_full_physics() {
    let mut system = ParticleSystem::with_seed(6);
    system.add_batch();

    for _ in 0..2000 {
        system.step_frame();
        for p in system.particles() {
            assert!(inside_domain(p), "escaped: {:?}", p.position);
            assert!(p.velocity.is_finite());
        }
    }
}

#[test]
fn step_with_zero_dt_is_a_no_op() {
    let mut system = ParticleSystem::with_seed(8);
    system.add_batch();
    let before: Vec<Particle> = system.particles().to_vec();

    system.step(0.0);
    for (a, b) in before.iter().zip(system.particles()) {
        assert_eq!(a.position, b.position);
    }
}
