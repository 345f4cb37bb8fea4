//! Camera system for 3D sample scenes.
//!
//! Provides a look-at camera with two variants (orbit and simple), the
//! factory constructors used by the sample renderers, and the GPU uniform
//! block filled from a camera every frame.

/// Core camera struct, variant tag and distance/angle limits.
pub mod core;
/// Convenience constructors for pre-configured cameras.
pub mod factory;
/// Spherical-coordinate state of the orbit variant.
pub mod orbit;
/// Up-vector handling of the simple variant.
pub mod simple;
/// GPU uniform block holding the camera matrices.
pub mod uniform;

pub use self::core::{Camera, CameraKind, CameraLimits};
pub use factory::CameraFactory;
pub use orbit::OrbitState;
pub use simple::SimpleState;
pub use uniform::CameraUniform;
