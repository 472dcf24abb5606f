//! Simulation and camera settings.
//!
//! Settings are plain validated structs written by the settings collaborator.
//! Changing `count` or `bounds` forces a full particle-store
//! reinitialization; `size` and `black_hole_radius` apply to subsequent
//! frames with no reinit. Quality presets carry default tiers for different
//! device classes.

use crate::error::SettingsError;
use clap::ValueEnum;

/// Settings owned by [`ParticleSimulation`](crate::simulation::ParticleSimulation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Particle count. A change reallocates the store.
    pub count: usize,
    /// Side of the spawn cube; also scales the rehoming threshold
    /// (`bounds * 1.2`). A change reallocates the store.
    pub bounds: f32,
    /// Particle visual size, passed through to the renderer untouched.
    pub size: f32,
    /// Attractor falloff scale, applied immediately.
    pub black_hole_radius: f32,
}

impl SimulationSettings {
    /// Set the particle count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the spawn cube side length.
    pub fn with_bounds(mut self, bounds: f32) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the render-only particle size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the attractor falloff scale.
    pub fn with_black_hole_radius(mut self, radius: f32) -> Self {
        self.black_hole_radius = radius;
        self
    }

    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.count == 0 {
            return Err(SettingsError::ZeroParticleCount);
        }
        if !(self.bounds > 0.0) {
            return Err(SettingsError::NonPositiveBounds(self.bounds));
        }
        if !(self.black_hole_radius > 0.0) {
            return Err(SettingsError::NonPositiveBlackHoleRadius(
                self.black_hole_radius,
            ));
        }
        Ok(())
    }

    /// Whether switching to `next` requires a full particle reset.
    pub fn requires_reinit(&self, next: &SimulationSettings) -> bool {
        self.count != next.count || self.bounds != next.bounds
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        QualityPreset::High.simulation()
    }
}

/// Settings consumed by [`InteractionController`](crate::controller::InteractionController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Whether the camera orbits on its own when the user is not dragging.
    pub auto_rotate: bool,
    /// Multiplier on the auto-orbit clock speed.
    pub rotation_speed: f32,
    /// Nominal orbit radius before breathing and zoom are applied.
    pub base_radius: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            rotation_speed: 1.0,
            base_radius: 50.0,
        }
    }
}

/// Device-class default tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QualityPreset {
    /// Low-resolution mobile: few particles, tight bounds.
    UltraLow,
    /// Mobile/tablet.
    Low,
    /// Desktop.
    High,
}

impl QualityPreset {
    /// Simulation settings for this tier.
    pub fn simulation(&self) -> SimulationSettings {
        match self {
            QualityPreset::UltraLow => SimulationSettings {
                count: 5_000,
                bounds: 40.0,
                size: 1.5,
                black_hole_radius: 1.3,
            },
            QualityPreset::Low => SimulationSettings {
                count: 30_000,
                bounds: 50.0,
                size: 1.3,
                black_hole_radius: 1.3,
            },
            QualityPreset::High => SimulationSettings {
                count: 60_000,
                bounds: 100.0,
                size: 1.0,
                black_hole_radius: 1.3,
            },
        }
    }

    /// Camera settings for this tier (identical across tiers today).
    pub fn camera(&self) -> CameraSettings {
        CameraSettings::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SimulationSettings::default().validate().is_ok());
        for preset in [QualityPreset::UltraLow, QualityPreset::Low, QualityPreset::High] {
            assert!(preset.simulation().validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        let zero_count = SimulationSettings::default().with_count(0);
        assert_eq!(zero_count.validate(), Err(SettingsError::ZeroParticleCount));

        let bad_bounds = SimulationSettings::default().with_bounds(-1.0);
        assert!(matches!(
            bad_bounds.validate(),
            Err(SettingsError::NonPositiveBounds(_))
        ));

        let nan_bounds = SimulationSettings::default().with_bounds(f32::NAN);
        assert!(nan_bounds.validate().is_err());

        let bad_radius = SimulationSettings::default().with_black_hole_radius(0.0);
        assert!(matches!(
            bad_radius.validate(),
            Err(SettingsError::NonPositiveBlackHoleRadius(_))
        ));
    }

    #[test]
    fn test_reinit_rules() {
        let base = SimulationSettings::default();
        assert!(base.requires_reinit(&base.with_count(1000)));
        assert!(base.requires_reinit(&base.with_bounds(20.0)));
        assert!(!base.requires_reinit(&base.with_size(2.0)));
        assert!(!base.requires_reinit(&base.with_black_hole_radius(0.6)));
    }
}
