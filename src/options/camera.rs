use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraLimits;
use crate::camera::core::DEFAULT_SCROLL_SCALE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and limit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Closest the eye may get to the target.
    #[schemars(title = "Min Distance", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub min_distance: f32,
    /// Farthest the eye may get from the target.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 10000.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Gap kept between the polar angle and either pole, in degrees.
    #[schemars(skip)]
    pub polar_margin_degrees: f32,
    /// Legacy scroll-to-zoom factor.
    #[schemars(skip)]
    pub scroll_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            min_distance: CameraLimits::DEFAULT_MIN_DISTANCE,
            max_distance: CameraLimits::DEFAULT_MAX_DISTANCE,
            polar_margin_degrees: CameraLimits::DEFAULT_POLAR_MARGIN.to_degrees(),
            scroll_scale: DEFAULT_SCROLL_SCALE,
        }
    }
}

impl CameraOptions {
    /// Distance and angle limits described by these options.
    #[must_use]
    pub fn limits(&self) -> CameraLimits {
        CameraLimits::new(
            self.min_distance,
            self.max_distance,
            self.polar_margin_degrees.to_radians(),
        )
    }

    /// Right-handed perspective projection with a `[0, 1]` depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn default_limits_match_camera_defaults() {
        let limits = CameraOptions::default().limits();
        let defaults = CameraLimits::default();
        assert_eq!(limits.min_distance(), defaults.min_distance());
        assert_eq!(limits.max_distance(), defaults.max_distance());
        assert!((limits.polar_margin() - defaults.polar_margin()).abs() < 1e-6);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let opts = CameraOptions::default();
        let projection = opts.projection_matrix(16.0 / 9.0);
        let clip = projection * Vec4::new(0.0, 0.0, -opts.znear, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
        let clip = projection * Vec4::new(0.0, 0.0, -opts.zfar, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }
}
