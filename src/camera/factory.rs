use glam::Vec3;

use super::core::{Camera, CameraKind};
use crate::error::CameraError;

/// Convenience constructors for the camera setups used by sample renderers.
pub struct CameraFactory;

impl CameraFactory {
    /// Orbit camera whose spherical coordinates reproduce `position`
    /// relative to `target`, orbiting about `up`.
    ///
    /// Fails with [`CameraError::InvalidGeometry`] when the placement is
    /// degenerate.
    pub fn generate_round_orbit_camera(
        position: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Camera, CameraError> {
        let camera = Camera::orbit(position, target, up)?;
        if let CameraKind::Orbit(state) = camera.kind() {
            log::debug!(
                "orbit camera: radius={:.3} phi={:.3} theta={:.3} around {}",
                state.radius(),
                state.phi(),
                state.theta(),
                camera.target()
            );
        }
        Ok(camera)
    }

    /// Simple camera with world `+Y` pinned as up (`fixed_up`) or an up
    /// vector derived from the view direction.
    pub fn simple_camera(
        position: Vec3,
        target: Vec3,
        fixed_up: bool,
    ) -> Result<Camera, CameraError> {
        let camera = Camera::simple(position, target, fixed_up)?;
        log::debug!(
            "simple camera at {} looking at {} (fixed_up={fixed_up})",
            camera.position(),
            camera.target()
        );
        Ok(camera)
    }

    /// Plain look-at camera with an explicit up vector.
    pub fn look_at_camera(
        position: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Camera, CameraError> {
        let camera = Camera::new(position, target, up)?;
        log::debug!(
            "look-at camera at {} looking at {}",
            camera.position(),
            camera.target()
        );
        Ok(camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryFault;

    #[test]
    fn round_orbit_reproduces_placement() {
        let position = Vec3::new(2.0, 3.0, 8.0);
        let target = Vec3::new(1.0, 0.0, -1.0);
        let camera =
            CameraFactory::generate_round_orbit_camera(position, target, Vec3::Y)
                .unwrap();
        assert!(camera.position().abs_diff_eq(position, 1e-4));
        assert_eq!(camera.target(), target);
        assert!(matches!(camera.kind(), CameraKind::Orbit(_)));
    }

    #[test]
    fn round_orbit_normalizes_up() {
        let camera = CameraFactory::generate_round_orbit_camera(
            Vec3::new(0.0, 0.0, 8.0),
            Vec3::ZERO,
            Vec3::new(0.0, 3.0, 0.0),
        )
        .unwrap();
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn round_orbit_rejects_degenerate_geometry() {
        let err = CameraFactory::generate_round_orbit_camera(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CameraError::InvalidGeometry(GeometryFault::CoincidentTarget)
        ));
    }

    #[test]
    fn simple_and_look_at_cameras_are_simple_kind() {
        let simple = CameraFactory::simple_camera(
            Vec3::new(0.0, 0.0, -1800.0),
            Vec3::ZERO,
            true,
        )
        .unwrap();
        let CameraKind::Simple(state) = simple.kind() else {
            panic!("expected simple camera");
        };
        assert!(state.fixed_up());

        let look_at =
            CameraFactory::look_at_camera(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)
                .unwrap();
        let CameraKind::Simple(state) = look_at.kind() else {
            panic!("expected simple camera");
        };
        assert!(!state.fixed_up());
    }
}
