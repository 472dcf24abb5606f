//! Particle storage and lifecycle.
//!
//! Positions and velocities live in two parallel `Vec<Vec3>` arrays sized by
//! the configured particle count. Changing the count or bounds is a full
//! reset, not an incremental resize: the store is reallocated and every
//! particle respawned. The render collaborator reads positions as a flat
//! `&[f32]` of `3 * count` components.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Radius of the respawn sphere around the origin.
pub const RESPAWN_RADIUS: f32 = 5.0;

/// Dense particle storage with spawn and rehoming helpers.
#[derive(Debug)]
pub struct ParticleStore {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    rng: SmallRng,
}

impl ParticleStore {
    /// Allocate `count` particles uniformly inside a cube of side `bounds`
    /// centered at the origin, with zero velocity.
    pub fn new(count: usize, bounds: f32, mut rng: SmallRng) -> Self {
        let half = bounds / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            positions,
            velocities: vec![Vec3::ZERO; count],
            rng,
        }
    }

    /// Seed a store from entropy.
    pub fn from_entropy(count: usize, bounds: f32) -> Self {
        Self::new(count, bounds, SmallRng::from_entropy())
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Particle positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Particle velocities.
    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Positions as a flat component array of length `3 * len()`.
    ///
    /// This is the buffer the render collaborator uploads after each step.
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Random point inside the respawn sphere near the origin.
    ///
    /// Both angles are uniform over a full turn and the radius is uniform,
    /// which biases samples toward the poles and center. Rehomed particles
    /// cluster near the origin either way, which is the point.
    pub(crate) fn respawn_point(&mut self) -> Vec3 {
        let theta = self.rng.gen_range(0.0..TAU);
        let phi = self.rng.gen_range(0.0..TAU);
        let r = self.rng.gen::<f32>() * RESPAWN_RADIUS;
        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Uniform jitter in `[-limit, limit)` for the soft boundary bounce.
    #[inline]
    pub(crate) fn boundary_jitter(&mut self, limit: f32) -> f32 {
        (self.rng.gen::<f32>() - 0.5) * 2.0 * limit
    }
}
