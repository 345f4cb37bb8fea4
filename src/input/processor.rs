//! Converts raw platform events into camera gestures.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, modifier keys). It is the only thing that sits between raw
//! window events and [`CameraRig::apply`](super::CameraRig::apply).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::gesture::CameraGesture;

/// Converts raw window events into [`CameraGesture`]s.
///
/// - left drag orbits, shift + left drag pans
/// - right or middle drag pans
/// - wheel scroll zooms, precise trackpad scroll orbits
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(gesture) = input.handle_event(event) {
///     rig.apply(&mut camera, gesture);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last known cursor position, if any.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    primary_pressed: bool,
    /// Whether the right or middle mouse button is currently held.
    secondary_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Forget held buttons, e.g. when the window loses focus mid-drag.
    pub fn release_mouse_state(&mut self) {
        self.primary_pressed = false;
        self.secondary_pressed = false;
    }

    /// Process a raw input event and return zero or one gestures.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraGesture> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.primary_pressed = pressed,
                    MouseButton::Right | MouseButton::Middle => {
                        self.secondary_pressed = pressed;
                    }
                }
                None
            }
            InputEvent::Scroll { delta, precise } => {
                Self::handle_scroll(delta, precise)
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Two-finger trackpad scrolling orbits, wheel notches zoom.
    fn handle_scroll(delta: Vec2, precise: bool) -> Option<CameraGesture> {
        if precise {
            (delta != Vec2::ZERO).then_some(CameraGesture::Orbit { delta })
        } else {
            (delta.y != 0.0).then_some(CameraGesture::Zoom { delta: delta.y })
        }
    }

    /// Track the cursor and turn movement under a held button into a drag.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CameraGesture> {
        let current = Vec2::new(x, y);
        let previous = self.last_cursor.replace(current)?;
        let delta = current - previous;
        if delta == Vec2::ZERO {
            return None;
        }

        if self.secondary_pressed || (self.primary_pressed && self.shift_pressed)
        {
            return Some(CameraGesture::Pan { delta });
        }
        if self.primary_pressed {
            return Some(CameraGesture::Orbit { delta });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputProcessor, button: MouseButton, pressed: bool) {
        assert_eq!(
            input.handle_event(InputEvent::MouseButton { button, pressed }),
            None
        );
    }

    fn move_to(input: &mut InputProcessor, x: f32, y: f32) -> Option<CameraGesture> {
        input.handle_event(InputEvent::CursorMoved { x, y })
    }

    #[test]
    fn hover_without_buttons_produces_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(move_to(&mut input, 0.0, 0.0), None);
        assert_eq!(move_to(&mut input, 5.0, 5.0), None);
        assert_eq!(input.cursor(), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn left_drag_orbits() {
        let mut input = InputProcessor::new();
        let _ = move_to(&mut input, 10.0, 10.0);
        press(&mut input, MouseButton::Left, true);
        assert_eq!(
            move_to(&mut input, 13.0, 6.0),
            Some(CameraGesture::Orbit {
                delta: Vec2::new(3.0, -4.0)
            })
        );
        press(&mut input, MouseButton::Left, false);
        assert_eq!(move_to(&mut input, 20.0, 6.0), None);
    }

    #[test]
    fn shift_drag_and_right_drag_pan() {
        let mut input = InputProcessor::new();
        let _ = move_to(&mut input, 0.0, 0.0);
        assert_eq!(
            input.handle_event(InputEvent::ModifiersChanged { shift: true }),
            None
        );
        press(&mut input, MouseButton::Left, true);
        assert!(matches!(
            move_to(&mut input, 1.0, 0.0),
            Some(CameraGesture::Pan { .. })
        ));
        press(&mut input, MouseButton::Left, false);
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: false });

        press(&mut input, MouseButton::Right, true);
        assert!(matches!(
            move_to(&mut input, 2.0, 0.0),
            Some(CameraGesture::Pan { .. })
        ));
        input.release_mouse_state();
        assert_eq!(move_to(&mut input, 3.0, 0.0), None);
    }

    #[test]
    fn first_known_position_has_no_delta() {
        let mut input = InputProcessor::new();
        press(&mut input, MouseButton::Left, true);
        assert!(input.mouse_pressed());
        assert_eq!(move_to(&mut input, 50.0, 50.0), None);
        assert_eq!(move_to(&mut input, 50.0, 50.0), None);
    }

    #[test]
    fn wheel_scroll_zooms_unless_zero() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll {
                delta: Vec2::new(0.0, 1.5),
                precise: false,
            }),
            Some(CameraGesture::Zoom { delta: 1.5 })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll {
                delta: Vec2::new(2.0, 0.0),
                precise: false,
            }),
            None
        );
    }

    #[test]
    fn precise_scroll_orbits_without_a_button() {
        let mut input = InputProcessor::new();
        assert!(!input.mouse_pressed());
        assert_eq!(
            input.handle_event(InputEvent::Scroll {
                delta: Vec2::new(-3.0, 4.0),
                precise: true,
            }),
            Some(CameraGesture::Orbit {
                delta: Vec2::new(-3.0, 4.0)
            })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll {
                delta: Vec2::ZERO,
                precise: true,
            }),
            None
        );
    }
}
