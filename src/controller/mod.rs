//! Single-purpose camera controllers.
//!
//! Each controller exposes exactly one kind of camera mutation, so an input
//! handler wired to, say, the scroll wheel can only ever zoom. Controllers
//! are small strategy objects: they hold a gain and take the camera by
//! `&mut` on every call, so several of them can drive one camera in turn.
//!
//! [`CameraController::attach`] binds a controller to a camera for a scope.
//! The returned [`Attached`] borrows the camera, so it cannot outlive it.

/// Dolly along the view axis.
pub mod forward;
/// Free translation of eye and target.
pub mod linear;
/// Rotation around the target.
pub mod satellite;

pub use forward::ForwardCameraController;
pub use linear::LinearMoveCameraController;
pub use satellite::SatelliteCameraController;

use crate::camera::Camera;
use crate::error::CameraError;

/// Common surface of the camera controllers.
pub trait CameraController: Sized {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Bind this controller to `camera` for the lifetime of the borrow.
    ///
    /// Fails with [`CameraError::NullCamera`] when no camera is given.
    fn attach(
        self,
        camera: Option<&mut Camera>,
    ) -> Result<Attached<'_, Self>, CameraError> {
        match camera {
            Some(camera) => {
                log::debug!("{} attached", self.name());
                Ok(Attached {
                    controller: self,
                    camera,
                })
            }
            None => {
                log::error!("{} attached without a camera", self.name());
                Err(CameraError::NullCamera)
            }
        }
    }
}

/// A controller bound to a borrowed camera.
#[derive(Debug)]
pub struct Attached<'a, C> {
    controller: C,
    camera: &'a mut Camera,
}

impl<C> Attached<'_, C> {
    /// The bound controller.
    #[must_use]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Read-only view of the attached camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera
    }

    /// Release the camera borrow, returning the controller.
    #[must_use]
    pub fn detach(self) -> C {
        self.controller
    }
}

impl Attached<'_, LinearMoveCameraController> {
    /// Translate the attached camera's eye and target.
    pub fn move_camera_with_translation(&mut self, translation: glam::Vec3) {
        self.controller
            .move_camera_with_translation(self.camera, translation);
    }
}

impl Attached<'_, ForwardCameraController> {
    /// Dolly the attached camera along its view axis.
    pub fn move_along_camera_direction(&mut self, amount: f32) {
        self.controller.move_along_camera_direction(self.camera, amount);
    }
}

impl Attached<'_, SatelliteCameraController> {
    /// Swing the attached camera around its target.
    pub fn rotate_camera_around_target(
        &mut self,
        delta_phi: f32,
        delta_theta: f32,
    ) {
        self.controller.rotate_camera_around_target(
            self.camera,
            delta_phi,
            delta_theta,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use super::*;
    use crate::camera::CameraFactory;

    #[test]
    fn attach_without_camera_fails() {
        let err = SatelliteCameraController::new().attach(None).unwrap_err();
        assert!(matches!(err, CameraError::NullCamera));
    }

    #[test]
    fn attached_controllers_share_one_camera_in_turn() {
        let mut camera = CameraFactory::generate_round_orbit_camera(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();

        let mut orbit = SatelliteCameraController::new()
            .attach(Some(&mut camera))
            .unwrap();
        orbit.rotate_camera_around_target(FRAC_PI_2, 0.0);
        assert!(orbit
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
        let satellite = orbit.detach();
        assert_eq!(satellite.name(), "satellite");

        let mut zoom = ForwardCameraController::new()
            .attach(Some(&mut camera))
            .unwrap();
        zoom.move_along_camera_direction(-2.0);
        assert!((zoom.camera().distance() - 3.0).abs() < 1e-5);
        let _ = zoom.detach();

        let mut pan = LinearMoveCameraController::new()
            .attach(Some(&mut camera))
            .unwrap();
        pan.move_camera_with_translation(Vec3::Y);
        assert_eq!(pan.controller().scale(), 1.0);
        let _ = pan.detach();

        assert_eq!(camera.target(), Vec3::Y);
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(3.0, 1.0, 0.0), 1e-4));
    }
}
