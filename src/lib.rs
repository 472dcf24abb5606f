//! # Stardust
//!
//! An interactive particle-flow simulation core: tens of thousands of point
//! particles drift through a procedurally animated 3D force field, and a
//! user-held "black hole" gesture pulls them into a swirling collapse around
//! the origin. An orbit camera with drag, pinch, wheel and long-press
//! gestures drives the attractor and resumes autonomous orbiting whenever
//! the user lets go.
//!
//! The crate owns simulation and interaction only. Rendering, UI and audio
//! are external collaborators that read the flat position buffer, the camera
//! transform and the polled [`Stats`] snapshot.
//!
//! ## Frame loop
//!
//! ```ignore
//! use stardust::prelude::*;
//!
//! let mut simulation = ParticleSimulation::new(QualityPreset::High.simulation())?;
//! let mut controller = InteractionController::new(CameraSettings::default());
//! let mut camera = OrbitCamera::new(16.0 / 9.0);
//! let mut clock = FrameClock::new();
//!
//! loop {
//!     // host pushes controller.push(event) for each input event ...
//!     let now = clock.tick();
//!     let strength = controller.update(now);
//!     simulation.step(strength);
//!     camera.position = controller.camera_position();
//!     // renderer re-uploads simulation.particles().positions_flat()
//! }
//! ```
//!
//! ## Determinism
//!
//! The force field is a pure function of `(grid_size, time)`; particle
//! spawning and boundary jitter draw from a seedable RNG
//! ([`ParticleSimulation::with_seed`]), so full runs are reproducible.

pub mod attractor;
pub mod camera;
pub mod controller;
pub mod error;
pub mod field;
pub mod input;
pub mod particles;
pub mod settings;
pub mod simulation;
pub mod stats;
pub mod time;

pub use attractor::BlackHole;
pub use camera::{Frustum, OrbitCamera};
pub use controller::{Gesture, InteractionController};
pub use error::SettingsError;
pub use field::ForceField;
pub use glam::{Mat4, Vec2, Vec3};
pub use input::{PointerButton, PointerEvent, WindowInput};
pub use particles::ParticleStore;
pub use settings::{CameraSettings, QualityPreset, SimulationSettings};
pub use simulation::ParticleSimulation;
pub use stats::Stats;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::attractor::BlackHole;
    pub use crate::camera::{Frustum, OrbitCamera};
    pub use crate::controller::{Gesture, InteractionController};
    pub use crate::field::ForceField;
    pub use crate::input::{PointerButton, PointerEvent, WindowInput};
    pub use crate::settings::{CameraSettings, QualityPreset, SimulationSettings};
    pub use crate::simulation::ParticleSimulation;
    pub use crate::stats::Stats;
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
