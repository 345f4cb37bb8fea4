use glam::Vec3;

use super::CameraController;
use crate::camera::Camera;

/// Moves eye and target together by a world-space translation (pan).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMoveCameraController {
    scale: f32,
}

impl Default for LinearMoveCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearMoveCameraController {
    /// Controller with unit gain.
    #[must_use]
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Controller that multiplies every translation by `scale`.
    #[must_use]
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    /// Gain applied to translations.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Translate the camera's eye and target by `translation * scale`.
    pub fn move_camera_with_translation(
        &self,
        camera: &mut Camera,
        translation: Vec3,
    ) {
        camera.move_with_translation(translation * self.scale);
    }
}

impl CameraController for LinearMoveCameraController {
    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraFactory;

    #[test]
    fn translation_pans_eye_and_target() {
        let mut camera = CameraFactory::look_at_camera(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        LinearMoveCameraController::new()
            .move_camera_with_translation(&mut camera, Vec3::X);
        assert_eq!(camera.position(), Vec3::new(1.0, 0.0, 5.0));
        assert_eq!(camera.target(), Vec3::X);
    }

    #[test]
    fn scale_multiplies_translation() {
        let mut camera = CameraFactory::generate_round_orbit_camera(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        let distance = camera.distance();
        LinearMoveCameraController::with_scale(0.5)
            .move_camera_with_translation(&mut camera, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(camera.target(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.distance(), distance);
    }
}
