use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraGesture`](super::CameraGesture) values.
///
/// # Example
///
/// ```
/// use camrig::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut input = InputProcessor::new();
/// let _ = input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
/// let gesture = input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 10.0 });
/// assert!(gesture.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel notches or precise trackpad deltas.
    Scroll {
        /// Horizontal and vertical scroll. For a wheel, positive `y` zooms
        /// in; precise deltas are treated like a drag.
        delta: Vec2,
        /// `true` for pixel-precise trackpad scrolling, `false` for a
        /// line-based wheel.
        precise: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(all(test, feature = "winit"))]
mod tests {
    use super::*;

    #[test]
    fn winit_buttons_map_onto_camera_buttons() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from(Winit::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(Winit::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(Winit::Back), MouseButton::Left);
    }
}
