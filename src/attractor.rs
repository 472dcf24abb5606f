//! Black hole attractor.
//!
//! A stateless per-frame force contribution: while the user holds the
//! gesture, every particle is pulled toward the origin with a tangential
//! swirl layered on top. Strength comes from the interaction controller's
//! ramp and is the only coupling between interaction and simulation.

use glam::Vec3;

/// Central attractor with a swirling pull.
///
/// `radius` scales the falloff: larger values shorten the effective reach.
/// Distance enters the falloff as `|position| * radius`; tune `radius`
/// against desired feel rather than a physical model.
#[derive(Clone, Copy, Debug)]
pub struct BlackHole {
    /// Falloff scale applied to particle distance.
    pub radius: f32,
}

impl BlackHole {
    /// Create an attractor with the given falloff scale.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Velocity delta for a particle at `position` under `strength` ∈ [0, 1].
    ///
    /// Radial pull toward the origin plus a half-magnitude tangential swirl
    /// in the XY plane; the z axis receives only the radial term. Returns
    /// zero when the strength is zero or the particle sits exactly at the
    /// origin (no defined direction).
    pub fn force(&self, position: Vec3, strength: f32) -> Vec3 {
        if strength <= 0.0 {
            return Vec3::ZERO;
        }
        let dist = position.length() * self.radius;
        if dist <= 0.0 {
            return Vec3::ZERO;
        }

        let magnitude = strength / (1.0 + dist * 0.1);
        let angle = position.y.atan2(position.x) + 0.1;
        Vec3::new(
            -position.x / dist * magnitude + angle.cos() * magnitude * 0.5,
            -position.y / dist * magnitude + angle.sin() * magnitude * 0.5,
            -position.z / dist * magnitude,
        )
    }
}

impl Default for BlackHole {
    fn default() -> Self {
        Self::new(1.3)
    }
}
