use glam::Vec2;

/// A high-level camera gesture in screen units.
///
/// Produced by [`InputProcessor`](super::InputProcessor) and consumed by
/// [`CameraRig::apply`](super::CameraRig::apply), which hands each variant
/// to exactly one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraGesture {
    /// Orbit drag by `delta` pixels of cursor movement.
    Orbit {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Pan drag by `delta` pixels of cursor movement.
    Pan {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Zoom by a scroll amount (positive = zoom in).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}
