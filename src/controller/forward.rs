use super::CameraController;
use crate::camera::Camera;

/// Moves the eye along the view axis: dolly / zoom.
///
/// Positive amounts move away from the target; the camera's distance
/// limits stop it short of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardCameraController {
    scale: f32,
}

impl Default for ForwardCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardCameraController {
    /// Controller with unit gain.
    #[must_use]
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Controller that multiplies every amount by `scale`.
    #[must_use]
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    /// Gain applied to dolly amounts.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Change the eye-target distance by `amount * scale`.
    pub fn move_along_camera_direction(&self, camera: &mut Camera, amount: f32) {
        camera.move_along_direction(amount * self.scale);
    }
}

impl CameraController for ForwardCameraController {
    fn name(&self) -> &'static str {
        "forward"
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{CameraFactory, CameraLimits};

    #[test]
    fn dolly_keeps_view_direction() {
        let mut camera = CameraFactory::simple_camera(
            Vec3::new(0.0, 3.0, 4.0),
            Vec3::ZERO,
            true,
        )
        .unwrap();
        let front = camera.front_direction();
        ForwardCameraController::with_scale(2.0)
            .move_along_camera_direction(&mut camera, -1.5);
        assert!((camera.distance() - 2.0).abs() < 1e-5);
        assert!(camera.front_direction().abs_diff_eq(front, 1e-6));
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 1.2, 1.6), 1e-5));
    }

    #[test]
    fn zoom_past_target_stops_at_min_distance() {
        let mut camera = CameraFactory::generate_round_orbit_camera(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        let controller = ForwardCameraController::new();
        for _ in 0..20 {
            controller.move_along_camera_direction(&mut camera, -1.0);
        }
        assert_eq!(camera.distance(), CameraLimits::DEFAULT_MIN_DISTANCE);
        assert!(camera.position().z > 0.0);
    }
}
