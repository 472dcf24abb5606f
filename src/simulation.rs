//! Particle simulation orchestration.
//!
//! One [`step`](ParticleSimulation::step) per rendered frame: resample the
//! force grid, accumulate field and attractor forces per particle, damp and
//! integrate, soft-bounce at the nominal boundary and rehome far strays.
//! The attractor strength argument is the only external control input.
//!
//! Two boundary behaviors are deliberately layered: a soft reflection with
//! random jitter near `bounds / 2`, and a hard respawn near the origin once
//! a particle drifts past `bounds * 1.2`.

use crate::attractor::BlackHole;
use crate::camera::Frustum;
use crate::error::SettingsError;
use crate::field::ForceField;
use crate::particles::ParticleStore;
use crate::settings::SimulationSettings;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Force grid resolution per axis.
const GRID_SIZE: usize = 16;
/// Horizontal field force scale.
const FIELD_FORCE_XY: f32 = 0.01;
/// Vertical field force scale, tuned weaker than the horizontal drift.
const FIELD_FORCE_Z: f32 = 0.008;
/// Uniform velocity drag per frame.
const DRAG: f32 = 0.985;
/// Jitter half-range applied before the soft boundary reflection.
const BOUNCE_JITTER: f32 = 5.0;
/// Simulation time advance per frame.
const TIME_STEP: f32 = 0.001;

/// The particle simulation core.
pub struct ParticleSimulation {
    settings: SimulationSettings,
    store: ParticleStore,
    field: ForceField,
    attractor: BlackHole,
    time: f32,
    last_strength: f32,
}

impl ParticleSimulation {
    /// Create a simulation from validated settings, seeded from entropy.
    pub fn new(settings: SimulationSettings) -> Result<Self, SettingsError> {
        Self::with_rng(settings, SmallRng::from_entropy())
    }

    /// Create a simulation with a fixed seed for reproducible runs.
    pub fn with_seed(settings: SimulationSettings, seed: u64) -> Result<Self, SettingsError> {
        Self::with_rng(settings, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(settings: SimulationSettings, rng: SmallRng) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!(
            "initializing particle store: count={} bounds={}",
            settings.count,
            settings.bounds
        );
        Ok(Self {
            settings,
            store: ParticleStore::new(settings.count, settings.bounds, rng),
            field: ForceField::new(GRID_SIZE),
            attractor: BlackHole::new(settings.black_hole_radius),
            time: 0.0,
            last_strength: 0.0,
        })
    }

    /// Apply new settings between frames.
    ///
    /// Count or bounds changes reallocate and respawn the whole store;
    /// size and black-hole radius take effect without a reset. Must not be
    /// called while a step is in progress — the caller queues settings
    /// changes and applies them immediately before the next step.
    pub fn apply_settings(&mut self, settings: SimulationSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        if self.settings.requires_reinit(&settings) {
            log::info!(
                "settings changed, reinitializing: count {} -> {}, bounds {} -> {}",
                self.settings.count,
                settings.count,
                self.settings.bounds,
                settings.bounds
            );
            self.store = ParticleStore::from_entropy(settings.count, settings.bounds);
        }
        self.attractor.radius = settings.black_hole_radius;
        self.settings = settings;
        Ok(())
    }

    /// Advance all particles one frame.
    ///
    /// `attractor_strength` outside [0, 1] is clamped; a single bad frame is
    /// isolated rather than propagated.
    pub fn step(&mut self, attractor_strength: f32) {
        let strength = attractor_strength.clamp(0.0, 1.0);
        let strength = if strength.is_finite() { strength } else { 0.0 };

        self.time += TIME_STEP;
        self.field.resample(self.time);

        let bounds = self.settings.bounds;
        let half_bounds = bounds / 2.0;
        let rehome_radius_sq = (bounds * 1.2) * (bounds * 1.2);
        let grid_size = self.field.grid_size();
        let mut respawned = 0usize;

        for i in 0..self.store.positions.len() {
            let mut p = self.store.positions[i];
            let mut v = self.store.velocities[i];

            // Field sample at the particle's grid cell.
            let scale = (grid_size - 1) as f32;
            let gx = ((p.x / bounds + 0.5) * scale).floor() as isize;
            let gy = ((p.y / bounds + 0.5) * scale).floor() as isize;
            let gz = ((p.z / bounds + 0.5) * scale).floor() as isize;
            let in_grid = |g: isize| g >= 0 && (g as usize) < grid_size;
            if in_grid(gx) && in_grid(gy) && in_grid(gz) {
                let force = self.field.value_at(gx as usize, gy as usize, gz as usize);
                v.x += force * FIELD_FORCE_XY;
                v.y += force * FIELD_FORCE_XY;
                v.z += force * FIELD_FORCE_Z;
            }

            if strength > 0.0 {
                v += self.attractor.force(p, strength);
            }

            // Damp, integrate, soft-bounce each axis independently.
            for axis in 0..3 {
                v[axis] *= DRAG;
                p[axis] += v[axis];
                if p[axis].abs() > half_bounds {
                    p[axis] += self.store.boundary_jitter(BOUNCE_JITTER);
                    p[axis] *= -0.95;
                }
            }

            // Far strays are rehomed near the origin with zeroed velocity.
            if p.length_squared() > rehome_radius_sq {
                p = self.store.respawn_point();
                v = glam::Vec3::ZERO;
                respawned += 1;
            }

            self.store.positions[i] = p;
            self.store.velocities[i] = v;
        }

        if respawned > 0 {
            log::debug!("rehomed {} particles", respawned);
        }
        self.last_strength = strength;
    }

    // ========== Read-only access ==========

    /// Current settings.
    #[inline]
    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Simulation time in the force field's units.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Particle storage (positions, velocities, flat buffer view).
    #[inline]
    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    /// The force field as sampled for the last step.
    #[inline]
    pub fn force_field(&self) -> &ForceField {
        &self.field
    }

    /// Mean absolute force over the grid, biased upward by the attractor.
    ///
    /// While the attractor was active last step, `strength * 2` is added so
    /// the displayed force reading responds visibly to interaction.
    pub fn average_force(&self) -> f32 {
        let mean = self.field.average_magnitude();
        if self.last_strength > 0.0 {
            mean + self.last_strength * 2.0
        } else {
            mean
        }
    }

    /// Count of particles inside the given frustum.
    ///
    /// O(N) over all particles; intended for periodic polling by a status
    /// readout, not for the per-frame hot path.
    pub fn visible_count(&self, frustum: &Frustum) -> usize {
        self.store
            .positions
            .iter()
            .filter(|p| frustum.contains(**p))
            .count()
    }
}
