//! Polled status snapshot.
//!
//! The status readout collaborator pulls a [`Stats`] snapshot at its own
//! cadence; nothing in the core pushes. Collecting a snapshot walks all
//! particles for the visibility count, so poll it periodically rather than
//! every frame.

use crate::camera::{rotation_degrees, OrbitCamera};
use crate::controller::InteractionController;
use crate::simulation::ParticleSimulation;
use glam::Vec3;

/// A point-in-time view of the simulation and camera state.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    /// Particles inside the camera frustum.
    pub visible_particles: usize,
    /// Configured particle count.
    pub total_particles: usize,
    /// Mean field force magnitude, biased while the attractor is held.
    pub average_force: f32,
    /// Camera world position.
    pub camera_position: Vec3,
    /// Orbit angles in degrees, wrapped to a single turn.
    pub camera_rotation_deg: (f32, f32),
    /// Smoothed camera speed in [0, 1].
    pub camera_velocity: f32,
}

impl Stats {
    /// Collect a snapshot from the core components.
    pub fn collect(
        simulation: &ParticleSimulation,
        camera: &OrbitCamera,
        controller: &InteractionController,
    ) -> Self {
        let (rx, ry) = controller.rotation();
        Self {
            visible_particles: simulation.visible_count(&camera.frustum()),
            total_particles: simulation.particles().len(),
            average_force: simulation.average_force(),
            camera_position: camera.position,
            camera_rotation_deg: rotation_degrees(rx, ry),
            camera_velocity: controller.velocity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{CameraSettings, SimulationSettings};

    #[test]
    fn test_collect_snapshot() {
        let settings = SimulationSettings::default()
            .with_count(200)
            .with_bounds(20.0);
        let mut sim = ParticleSimulation::with_seed(settings, 11).unwrap();
        let mut controller = InteractionController::new(CameraSettings::default());
        let mut camera = OrbitCamera::new(16.0 / 9.0);

        controller.update(1.0 / 60.0);
        camera.position = controller.camera_position();
        sim.step(0.0);

        let stats = Stats::collect(&sim, &camera, &controller);
        assert_eq!(stats.total_particles, 200);
        assert!(stats.visible_particles <= stats.total_particles);
        assert!(stats.average_force >= 0.0);
        assert!(stats.camera_velocity >= 0.0 && stats.camera_velocity <= 1.0);
        assert!(stats.camera_rotation_deg.0.abs() < 360.0);
    }
}
