//! Error types for simulation configuration.
//!
//! The simulation core has no I/O; the only failures it can report are
//! invalid settings caught at construction or reinitialization time.

use std::fmt;

/// Errors raised when validating [`SimulationSettings`](crate::settings::SimulationSettings).
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Particle count must be at least 1.
    ZeroParticleCount,
    /// Bounds define the spawn cube and the rehoming threshold; must be positive.
    NonPositiveBounds(f32),
    /// Black hole radius scales the attractor falloff; must be positive.
    NonPositiveBlackHoleRadius(f32),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::ZeroParticleCount => {
                write!(f, "Particle count must be at least 1")
            }
            SettingsError::NonPositiveBounds(b) => {
                write!(f, "Simulation bounds must be positive, got {}", b)
            }
            SettingsError::NonPositiveBlackHoleRadius(r) => {
                write!(f, "Black hole radius must be positive, got {}", r)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let msg = SettingsError::NonPositiveBounds(-3.0).to_string();
        assert!(msg.contains("-3"));
        assert!(SettingsError::ZeroParticleCount
            .to_string()
            .contains("at least 1"));
    }
}
