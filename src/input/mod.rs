//! Input handling: event types, gestures, the input processor that converts
//! raw window events into gestures, and the rig that routes each gesture to
//! a single controller.

/// Platform-agnostic input events.
pub mod event;
/// High-level camera gestures.
pub mod gesture;
/// Converts raw events into camera gestures.
pub mod processor;
/// Routes gestures to controllers.
pub mod rig;

pub use event::{InputEvent, MouseButton};
pub use gesture::CameraGesture;
pub use processor::InputProcessor;
pub use rig::CameraRig;
