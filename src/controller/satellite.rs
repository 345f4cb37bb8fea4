use super::CameraController;
use crate::camera::Camera;

/// Swings the eye around the target: orbit drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteCameraController {
    sensitivity: f32,
}

impl Default for SatelliteCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl SatelliteCameraController {
    /// Controller that passes angles through unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self { sensitivity: 1.0 }
    }

    /// Controller that multiplies both angles by `sensitivity`.
    #[must_use]
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    /// Gain applied to both angles.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Rotate the camera around its target by azimuth `delta_phi` and polar
    /// `delta_theta` (radians, scaled by the sensitivity).
    pub fn rotate_camera_around_target(
        &self,
        camera: &mut Camera,
        delta_phi: f32,
        delta_theta: f32,
    ) {
        camera.rotate_around_target(
            delta_phi * self.sensitivity,
            delta_theta * self.sensitivity,
        );
    }
}

impl CameraController for SatelliteCameraController {
    fn name(&self) -> &'static str {
        "satellite"
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec3;

    use super::*;
    use crate::camera::CameraFactory;

    fn orbit_camera() -> Camera {
        CameraFactory::generate_round_orbit_camera(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap()
    }

    #[test]
    fn positive_phi_swings_from_z_toward_x() {
        let mut camera = orbit_camera();
        SatelliteCameraController::new()
            .rotate_camera_around_target(&mut camera, FRAC_PI_2, 0.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn sensitivity_scales_both_angles() {
        let mut camera = orbit_camera();
        SatelliteCameraController::with_sensitivity(0.5)
            .rotate_camera_around_target(&mut camera, PI, 0.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn dragging_over_the_pole_does_not_flip_up() {
        let mut camera = orbit_camera();
        let controller = SatelliteCameraController::new();
        for _ in 0..40 {
            controller.rotate_camera_around_target(&mut camera, 0.0, -0.1);
        }
        assert_eq!(camera.up(), Vec3::Y);
        assert!(camera.position().y > 4.9);
        assert!(camera.up_direction().dot(Vec3::Y) > 0.0);
        assert!(camera.view_matrix().determinant().abs() > 0.5);
    }
}
