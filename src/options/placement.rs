use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraFactory, CameraLimits};
use crate::error::CameraError;

/// Which camera variant a placement builds.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraModel {
    /// Round orbit camera around the target.
    #[default]
    Orbit,
    /// Simple camera whose up vector follows rotations.
    Simple,
    /// Simple camera with up pinned to world `+Y`.
    FixedUp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placement", inline)]
#[serde(default)]
/// Initial camera placement.
pub struct PlacementOptions {
    /// Camera variant to build.
    #[schemars(title = "Model")]
    pub model: CameraModel,
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Orbit axis / up vector. Ignored by the simple models.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            model: CameraModel::Orbit,
            position: [0.0, 0.0, 8.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl PlacementOptions {
    /// Build the configured camera and apply `limits`.
    pub fn build(&self, limits: CameraLimits) -> Result<Camera, CameraError> {
        let position = Vec3::from_array(self.position);
        let target = Vec3::from_array(self.target);
        let camera = match self.model {
            CameraModel::Orbit => CameraFactory::generate_round_orbit_camera(
                position,
                target,
                Vec3::from_array(self.up),
            )?,
            CameraModel::Simple => {
                CameraFactory::simple_camera(position, target, false)?
            }
            CameraModel::FixedUp => {
                CameraFactory::simple_camera(position, target, true)?
            }
        };
        Ok(camera.with_limits(limits))
    }
}
