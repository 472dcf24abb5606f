//! Pointer event queue for the interaction controller.
//!
//! The controller never installs callbacks: the host pushes [`PointerEvent`]s
//! as they arrive and the controller drains them synchronously at the start
//! of its per-frame `update()`. [`WindowInput`] translates raw winit window
//! events into pointer events for windowed hosts; headless hosts and tests
//! construct events directly.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

/// Which pointer button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button or a single touch.
    Primary,
    /// Right mouse button; arms the attractor immediately.
    Secondary,
}

/// A single user-input event consumed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a screen position.
    Down { x: f32, y: f32, button: PointerButton },
    /// Pointer moved to a screen position.
    Move { x: f32, y: f32 },
    /// Pointer released.
    Up,
    /// Pointer left the surface; treated like a release.
    Leave,
    /// Touch contact set changed to the given points (one or two).
    TouchStart { points: Vec<Vec2> },
    /// Active touch points moved.
    TouchMove { points: Vec<Vec2> },
    /// All touch contacts lifted.
    TouchEnd,
    /// Wheel scrolled; positive `delta_y` zooms out (browser convention).
    Wheel { delta_y: f32 },
}

/// Translates winit window events into [`PointerEvent`]s.
///
/// Winit reports button presses without a position and touches one contact
/// at a time, so this keeps the little state needed to emit self-contained
/// events: the last cursor position and the set of active touch points.
#[derive(Debug, Default)]
pub struct WindowInput {
    cursor: Vec2,
    touches: Vec<(u64, Vec2)>,
}

impl WindowInput {
    /// Create a translator with no tracked state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event, returning the pointer event to enqueue, if any.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Move {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Right => PointerButton::Secondary,
                    _ => PointerButton::Primary,
                };
                match state {
                    ElementState::Pressed => Some(PointerEvent::Down {
                        x: self.cursor.x,
                        y: self.cursor.y,
                        button,
                    }),
                    ElementState::Released => Some(PointerEvent::Up),
                }
            }

            WindowEvent::CursorLeft { .. } => Some(PointerEvent::Leave),

            WindowEvent::MouseWheel { delta, .. } => {
                // Browser-style sign: scrolling toward the user is positive.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 40.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(PointerEvent::Wheel { delta_y })
            }

            WindowEvent::Touch(touch) => {
                let point = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => {
                        self.touches.push((touch.id, point));
                        Some(PointerEvent::TouchStart {
                            points: self.points(),
                        })
                    }
                    TouchPhase::Moved => {
                        if let Some(entry) =
                            self.touches.iter_mut().find(|(id, _)| *id == touch.id)
                        {
                            entry.1 = point;
                        }
                        Some(PointerEvent::TouchMove {
                            points: self.points(),
                        })
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.touches.retain(|(id, _)| *id != touch.id);
                        if self.touches.is_empty() {
                            Some(PointerEvent::TouchEnd)
                        } else {
                            // A finger remains; restart the gesture from it.
                            Some(PointerEvent::TouchStart {
                                points: self.points(),
                            })
                        }
                    }
                }
            }

            _ => None,
        }
    }

    fn points(&self) -> Vec<Vec2> {
        self.touches.iter().map(|(_, p)| *p).collect()
    }
}
