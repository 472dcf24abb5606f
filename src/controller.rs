//! Interaction controller: gestures, attractor ramp, orbit camera motion.
//!
//! A poll-driven state machine over pointer input. Events are queued by the
//! host and drained inside [`update`](InteractionController::update), so all
//! state mutation happens in one call per frame; the long-press is an
//! explicit deadline compared against frame time, not a timer callback.
//!
//! Each update produces the camera's world position (orbiting the origin)
//! and returns the attractor strength, the single value the particle
//! simulation consumes from interaction. A 5-sample rolling window over the
//! camera's own motion feeds the host's motion-blur feedback.

use crate::input::{PointerButton, PointerEvent};
use crate::settings::CameraSettings;
use glam::{Vec2, Vec3};
use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_3;

/// Hold duration that arms the attractor.
pub const LONG_PRESS_SECS: f32 = 0.5;
/// Motion below this many pixels is not yet a drag.
const DRAG_THRESHOLD_PX: f32 = 3.0;
/// Attractor strength gained per frame while held.
const ATTRACTOR_RAMP: f32 = 0.1;
/// Geometric decay applied per frame once released.
const ATTRACTOR_DECAY: f32 = 0.95;
/// Zoom clamp range.
const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 2.0;
/// Pixels-to-radians drag sensitivity.
const DRAG_SENSITIVITY: f32 = 0.01;
/// Wheel delta to zoom factor.
const WHEEL_SENSITIVITY: f32 = 0.001;
/// Auto-orbit clock advance per frame at rotation speed 1.0.
const AUTO_ORBIT_STEP: f32 = 0.005;
/// Rolling window length for velocity smoothing.
const VELOCITY_WINDOW: usize = 5;
/// Normalization ceiling for the reported velocity.
const MAX_VELOCITY: f32 = 2.0;

/// Current gesture of the pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No pointer contact.
    Idle,
    /// Single contact moving the camera.
    Dragging,
    /// Two contacts adjusting zoom.
    Pinching,
    /// Single contact held, long-press deadline pending.
    LongPressArmed,
    /// Hold matured (or secondary button); attractor ramping.
    LongPressActive,
}

/// Gesture state machine driving the orbit camera and the attractor.
#[derive(Debug)]
pub struct InteractionController {
    settings: CameraSettings,
    queue: VecDeque<PointerEvent>,

    gesture: Gesture,
    pointer_down: bool,
    last_pointer: Vec2,
    long_press_deadline: Option<f32>,
    pinch_distance: f32,

    rotation_x: f32,
    rotation_y: f32,
    zoom: f32,
    attractor_strength: f32,

    auto_orbit: bool,
    orbit_time: f32,
    auto_start_time: f32,
    auto_base_x: f32,
    auto_base_y: f32,

    camera_position: Vec3,
    last_position: Vec3,
    last_rotation_x: f32,
    last_rotation_y: f32,
    velocity_window: [f32; VELOCITY_WINDOW],
    smooth_velocity: f32,
}

impl InteractionController {
    /// Create a controller in auto-orbit at the configured base radius.
    pub fn new(settings: CameraSettings) -> Self {
        let start = Vec3::new(0.0, 0.0, settings.base_radius);
        Self {
            settings,
            queue: VecDeque::new(),
            gesture: Gesture::Idle,
            pointer_down: false,
            last_pointer: Vec2::ZERO,
            long_press_deadline: None,
            pinch_distance: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: 1.0,
            attractor_strength: 0.0,
            auto_orbit: true,
            orbit_time: 0.0,
            auto_start_time: 0.0,
            auto_base_x: 0.0,
            auto_base_y: 0.0,
            camera_position: start,
            last_position: start,
            last_rotation_x: 0.0,
            last_rotation_y: 0.0,
            velocity_window: [0.0; VELOCITY_WINDOW],
            smooth_velocity: 0.0,
        }
    }

    // ========== Host-facing input ==========

    /// Queue a pointer event for the next update.
    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Enable or disable autonomous orbiting.
    ///
    /// Re-enabling re-seeds the orbit clock from the current horizontal
    /// angle so the autonomous motion continues from where the camera is.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.settings.auto_rotate = enabled;
        if enabled {
            self.orbit_time = self.rotation_x / 0.4;
        }
    }

    /// Set the auto-orbit speed multiplier.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.settings.rotation_speed = speed;
    }

    /// Set the nominal orbit radius.
    pub fn set_distance(&mut self, distance: f32) {
        self.settings.base_radius = distance;
    }

    // ========== Per-frame update ==========

    /// Advance one frame at `now` seconds; returns the attractor strength.
    pub fn update(&mut self, now: f32) -> f32 {
        while let Some(event) = self.queue.pop_front() {
            self.apply_event(event, now);
        }

        if self.settings.auto_rotate && self.auto_orbit {
            self.orbit_time += AUTO_ORBIT_STEP * self.settings.rotation_speed;
        }

        // Long press matures by deadline, checked once per frame.
        if self.gesture == Gesture::LongPressArmed {
            if let Some(deadline) = self.long_press_deadline {
                if now >= deadline {
                    log::debug!("long press matured at t={:.3}", now);
                    self.gesture = Gesture::LongPressActive;
                    self.long_press_deadline = None;
                }
            }
        }

        self.attractor_strength = if self.gesture == Gesture::LongPressActive {
            (self.attractor_strength + ATTRACTOR_RAMP).min(1.0)
        } else {
            self.attractor_strength * ATTRACTOR_DECAY
        };

        // The orbit radius breathes with two slow sine terms.
        let radius = (self.settings.base_radius
            + (self.orbit_time * 0.3).sin() * 5.0
            + (self.orbit_time * 0.5).sin() * 5.0)
            * self.zoom;

        if self.settings.auto_rotate && self.auto_orbit {
            let dt = self.orbit_time - self.auto_start_time;
            self.rotation_x = self.auto_base_x + (dt * 0.4).sin() * 0.5;
            self.rotation_y = self.auto_base_y + (dt * 0.2).sin() * 0.15;
        }

        let new_position = spherical_position(self.rotation_x, self.rotation_y, radius);
        self.track_velocity(new_position, radius);
        self.camera_position = new_position;

        self.attractor_strength
    }

    // ========== Accessors ==========

    /// Camera world position; the camera always looks at the origin.
    #[inline]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Orbit angles `(rotation_x, rotation_y)` in radians.
    #[inline]
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    /// Zoom multiplier, within [0.5, 2.0].
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current attractor strength in [0, 1].
    #[inline]
    pub fn attractor_strength(&self) -> f32 {
        self.attractor_strength
    }

    /// Current gesture state.
    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture == Gesture::Dragging
    }

    /// Whether the camera is orbiting autonomously.
    #[inline]
    pub fn auto_orbit(&self) -> bool {
        self.auto_orbit
    }

    /// Smoothed camera speed normalized to [0, 1], for motion-blur feedback.
    pub fn velocity(&self) -> f32 {
        (self.smooth_velocity / MAX_VELOCITY).min(1.0)
    }

    // ========== Event handling ==========

    fn apply_event(&mut self, event: PointerEvent, now: f32) {
        match event {
            PointerEvent::Down { x, y, button } => self.on_down(x, y, button, now),
            PointerEvent::Move { x, y } => self.on_move(x, y),
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::TouchEnd => {
                self.end_interaction()
            }
            PointerEvent::TouchStart { points } => self.on_touch_start(&points, now),
            PointerEvent::TouchMove { points } => self.on_touch_move(&points),
            PointerEvent::Wheel { delta_y } => {
                self.zoom = (self.zoom + delta_y * WHEEL_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
            }
        }
    }

    fn on_down(&mut self, x: f32, y: f32, button: PointerButton, now: f32) {
        self.pointer_down = true;
        self.last_pointer = Vec2::new(x, y);
        if button == PointerButton::Secondary {
            // Secondary button skips the hold entirely.
            self.gesture = Gesture::LongPressActive;
            self.long_press_deadline = None;
        } else {
            self.gesture = Gesture::LongPressArmed;
            self.long_press_deadline = Some(now + LONG_PRESS_SECS);
        }
    }

    fn on_move(&mut self, x: f32, y: f32) {
        if !self.pointer_down || self.gesture == Gesture::LongPressActive {
            return;
        }
        if self.gesture == Gesture::Pinching {
            return;
        }
        self.drag_move(x, y);
    }

    fn on_touch_start(&mut self, points: &[Vec2], now: f32) {
        self.pointer_down = true;
        if points.len() >= 2 {
            self.gesture = Gesture::Pinching;
            self.long_press_deadline = None;
            self.pinch_distance = points[0].distance(points[1]);
        } else if let Some(&p) = points.first() {
            self.last_pointer = p;
            self.gesture = Gesture::LongPressArmed;
            self.long_press_deadline = Some(now + LONG_PRESS_SECS);
        }
    }

    fn on_touch_move(&mut self, points: &[Vec2]) {
        if !self.pointer_down {
            return;
        }
        if points.len() >= 2 {
            let new_distance = points[0].distance(points[1]);
            if self.gesture != Gesture::Pinching || self.pinch_distance <= 0.0 {
                self.gesture = Gesture::Pinching;
                self.long_press_deadline = None;
            } else {
                let scale = new_distance / self.pinch_distance;
                self.zoom = (self.zoom * scale).clamp(ZOOM_MIN, ZOOM_MAX);
            }
            self.pinch_distance = new_distance;
        } else if let Some(&p) = points.first() {
            if self.gesture != Gesture::LongPressActive {
                self.drag_move(p.x, p.y);
            }
        }
    }

    fn drag_move(&mut self, x: f32, y: f32) {
        let dx = x - self.last_pointer.x;
        let dy = y - self.last_pointer.y;

        if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
            if self.gesture != Gesture::Dragging {
                log::debug!("drag started");
            }
            self.gesture = Gesture::Dragging;
            self.long_press_deadline = None;
            self.auto_orbit = false;
        }

        self.rotation_x += dx * DRAG_SENSITIVITY;
        self.rotation_y =
            (self.rotation_y + dy * DRAG_SENSITIVITY).clamp(-FRAC_PI_3, FRAC_PI_3);

        self.last_pointer = Vec2::new(x, y);
    }

    /// Reset all gesture state. Idempotent; safe on spurious release events.
    fn end_interaction(&mut self) {
        self.long_press_deadline = None;
        self.pointer_down = false;
        self.gesture = Gesture::Idle;
        self.pinch_distance = 0.0;

        // Resume autonomous orbiting from wherever the user left the camera.
        if !self.auto_orbit {
            self.auto_orbit = true;
            self.auto_start_time = self.orbit_time;
            self.auto_base_x = self.rotation_x;
            self.auto_base_y = self.rotation_y;
            log::debug!(
                "auto-orbit resumed from rotation ({:.3}, {:.3})",
                self.rotation_x,
                self.rotation_y
            );
        }
    }

    // ========== Velocity smoothing ==========

    fn track_velocity(&mut self, new_position: Vec3, radius: f32) {
        let displacement = (new_position - self.last_position).length();

        // Arc length travelled: combined angle delta times orbit radius.
        let rotation_delta = ((self.rotation_x - self.last_rotation_x)
            + (self.rotation_y - self.last_rotation_y))
            .abs();
        let rotation_velocity = rotation_delta * radius;

        let total = displacement.max(rotation_velocity);

        self.velocity_window.rotate_left(1);
        self.velocity_window[VELOCITY_WINDOW - 1] = total;
        self.smooth_velocity =
            self.velocity_window.iter().sum::<f32>() / VELOCITY_WINDOW as f32;

        self.last_position = new_position;
        self.last_rotation_x = self.rotation_x;
        self.last_rotation_y = self.rotation_y;
    }
}

/// Spherical-to-Cartesian conversion for the orbit camera.
#[inline]
fn spherical_position(rotation_x: f32, rotation_y: f32, radius: f32) -> Vec3 {
    Vec3::new(
        rotation_x.sin() * radius * rotation_y.cos(),
        rotation_y.sin() * radius,
        rotation_x.cos() * radius * rotation_y.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;

    const FRAME: f32 = 1.0 / 60.0;

    fn manual_controller() -> InteractionController {
        // Auto-rotate off keeps angles exactly where gestures put them.
        InteractionController::new(CameraSettings {
            auto_rotate: false,
            ..CameraSettings::default()
        })
    }

    fn drive(controller: &mut InteractionController, frames: usize, start: f32) -> f32 {
        let mut now = start;
        for _ in 0..frames {
            now += FRAME;
            controller.update(now);
        }
        now
    }

    #[test]
    fn test_drag_rotates_camera() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 100.0,
            y: 100.0,
            button: PointerButton::Primary,
        });
        c.push(PointerEvent::Move { x: 150.0, y: 100.0 });
        c.update(FRAME);

        assert!(c.is_dragging());
        assert!(!c.auto_orbit());
        let (rx, _) = c.rotation();
        assert!((rx - 0.5).abs() < 1e-5, "50 px * 0.01 = 0.5 rad, got {}", rx);
    }

    #[test]
    fn test_vertical_rotation_clamped() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Primary,
        });
        c.push(PointerEvent::Move { x: 0.0, y: 10_000.0 });
        c.update(FRAME);
        let (_, ry) = c.rotation();
        assert!((ry - FRAC_PI_3).abs() < 1e-5);

        c.push(PointerEvent::Move { x: 0.0, y: -30_000.0 });
        c.update(2.0 * FRAME);
        let (_, ry) = c.rotation();
        assert!((ry + FRAC_PI_3).abs() < 1e-5);
    }

    #[test]
    fn test_sub_threshold_motion_keeps_long_press_armed() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 50.0,
            y: 50.0,
            button: PointerButton::Primary,
        });
        c.push(PointerEvent::Move { x: 52.0, y: 50.0 });
        c.update(FRAME);
        assert_eq!(c.gesture(), Gesture::LongPressArmed);
    }

    #[test]
    fn test_long_press_ramps_to_full_strength() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 50.0,
            y: 50.0,
            button: PointerButton::Primary,
        });
        // Hold through the deadline plus ten ramp frames.
        let now = drive(&mut c, 45, 0.0);
        assert_eq!(c.gesture(), Gesture::LongPressActive);
        assert!((c.attractor_strength() - 1.0).abs() < 1e-6);

        // Ramp is monotonic while held.
        let before = c.attractor_strength();
        c.update(now + FRAME);
        assert!(c.attractor_strength() >= before);
    }

    #[test]
    fn test_release_decays_geometrically() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 50.0,
            y: 50.0,
            button: PointerButton::Primary,
        });
        let now = drive(&mut c, 45, 0.0);
        assert!((c.attractor_strength() - 1.0).abs() < 1e-6);

        c.push(PointerEvent::Up);
        let mut prev = c.attractor_strength();
        let mut t = now;
        for _ in 0..90 {
            t += FRAME;
            c.update(t);
            assert!(c.attractor_strength() < prev);
            prev = c.attractor_strength();
        }
        assert!(c.attractor_strength() < 0.01);
    }

    #[test]
    fn test_secondary_button_skips_the_hold() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 10.0,
            y: 10.0,
            button: PointerButton::Secondary,
        });
        c.update(FRAME);
        assert_eq!(c.gesture(), Gesture::LongPressActive);
        assert!(c.attractor_strength() > 0.0);
    }

    #[test]
    fn test_wheel_zoom_clamped() {
        let mut c = manual_controller();
        for _ in 0..50 {
            c.push(PointerEvent::Wheel { delta_y: 100.0 });
        }
        c.update(FRAME);
        assert!((c.zoom() - ZOOM_MAX).abs() < 1e-6);

        for _ in 0..100 {
            c.push(PointerEvent::Wheel { delta_y: -100.0 });
        }
        c.update(2.0 * FRAME);
        assert!((c.zoom() - ZOOM_MIN).abs() < 1e-6);
    }

    #[test]
    fn test_pinch_scales_zoom() {
        let mut c = manual_controller();
        c.push(PointerEvent::TouchStart {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
        });
        c.push(PointerEvent::TouchMove {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(150.0, 0.0)],
        });
        c.update(FRAME);
        assert_eq!(c.gesture(), Gesture::Pinching);
        assert!((c.zoom() - 1.5).abs() < 1e-5);

        // A huge spread clamps at the ceiling.
        c.push(PointerEvent::TouchMove {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(1500.0, 0.0)],
        });
        c.update(2.0 * FRAME);
        assert!((c.zoom() - ZOOM_MAX).abs() < 1e-6);
    }

    #[test]
    fn test_release_recaptures_auto_orbit_base() {
        let mut c = InteractionController::new(CameraSettings::default());
        c.push(PointerEvent::Down {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Primary,
        });
        c.push(PointerEvent::Move { x: 80.0, y: 0.0 });
        c.update(FRAME);
        assert!(!c.auto_orbit());
        let (rx_manual, _) = c.rotation();

        c.push(PointerEvent::Up);
        c.update(2.0 * FRAME);
        assert!(c.auto_orbit());
        // Auto orbit resumes near the manual end angle, not from zero.
        let (rx_auto, _) = c.rotation();
        assert!((rx_auto - rx_manual).abs() < 0.05);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut c = manual_controller();
        c.push(PointerEvent::Up);
        c.push(PointerEvent::Leave);
        c.push(PointerEvent::Up);
        c.update(FRAME);
        assert_eq!(c.gesture(), Gesture::Idle);
        assert!(c.attractor_strength() < 1e-6);
    }

    #[test]
    fn test_velocity_converges_to_zero_when_still() {
        let mut c = manual_controller();
        c.push(PointerEvent::Down {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Primary,
        });
        c.push(PointerEvent::Move { x: 200.0, y: 0.0 });
        c.update(FRAME);
        assert!(c.velocity() > 0.0);

        // Stationary camera: the 5-slot window flushes to zero.
        drive(&mut c, 6, FRAME);
        assert!(c.velocity() < 1e-6);
    }

    #[test]
    fn test_auto_orbit_advances_only_with_auto_rotate() {
        let mut manual = manual_controller();
        let (rx0, ry0) = manual.rotation();
        drive(&mut manual, 30, 0.0);
        assert_eq!(manual.rotation(), (rx0, ry0));

        let mut auto = InteractionController::new(CameraSettings::default());
        drive(&mut auto, 30, 0.0);
        let (rx, _) = auto.rotation();
        assert!(rx != 0.0);
    }
}
