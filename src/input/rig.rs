use glam::Vec2;

use super::gesture::CameraGesture;
use crate::camera::Camera;
use crate::controller::{
    ForwardCameraController, LinearMoveCameraController,
    SatelliteCameraController,
};
use crate::options::ControlOptions;

/// Routes each [`CameraGesture`] to the one controller allowed to perform it.
///
/// - orbit drags go to the [`SatelliteCameraController`]
/// - pan drags go to the [`LinearMoveCameraController`]
/// - zoom goes to the [`ForwardCameraController`]
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    satellite: SatelliteCameraController,
    linear: LinearMoveCameraController,
    forward: ForwardCameraController,
    controls: ControlOptions,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(ControlOptions::default())
    }
}

impl CameraRig {
    /// Build a rig whose controller gains come from `controls`.
    #[must_use]
    pub fn new(controls: ControlOptions) -> Self {
        Self {
            satellite: SatelliteCameraController::with_sensitivity(
                controls.rotate_speed.to_radians(),
            ),
            linear: LinearMoveCameraController::with_scale(controls.pan_speed),
            forward: ForwardCameraController::with_scale(controls.zoom_speed),
            controls,
        }
    }

    /// Active control options.
    #[must_use]
    pub fn controls(&self) -> &ControlOptions {
        &self.controls
    }

    /// Replace the control options, rebuilding the controller gains.
    pub fn set_controls(&mut self, controls: ControlOptions) {
        *self = Self::new(controls);
    }

    /// Apply `gesture` to `camera`. Returns `false` when the gesture is
    /// disabled and the camera was left untouched.
    pub fn apply(&self, camera: &mut Camera, gesture: CameraGesture) -> bool {
        match gesture {
            CameraGesture::Orbit { delta } if self.controls.enable_orbit => {
                self.orbit(camera, delta);
                true
            }
            CameraGesture::Pan { delta } if self.controls.enable_pan => {
                self.pan(camera, delta);
                true
            }
            CameraGesture::Zoom { delta } if self.controls.enable_zoom => {
                self.zoom(camera, delta);
                true
            }
            _ => {
                log::trace!("ignoring disabled gesture {gesture:?}");
                false
            }
        }
    }

    /// Drag right swings the eye toward `+phi`, drag down toward `+theta`.
    fn orbit(&self, camera: &mut Camera, delta: Vec2) {
        self.satellite
            .rotate_camera_around_target(camera, delta.x, delta.y);
    }

    /// Drag moves the scene with the cursor: the camera goes the other way.
    fn pan(&self, camera: &mut Camera, delta: Vec2) {
        let translation = camera.right_direction() * -delta.x
            + camera.up_direction() * delta.y;
        self.linear.move_camera_with_translation(camera, translation);
    }

    /// Proportional dolly so zoom feels the same near and far.
    fn zoom(&self, camera: &mut Camera, delta: f32) {
        let amount = -delta * camera.distance();
        self.forward.move_along_camera_direction(camera, amount);
    }
}
