use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Gesture sensitivities and which gestures reach the camera.
pub struct ControlOptions {
    /// Orbit rotation per pixel of drag, in degrees.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan translation per pixel of drag, in world units.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Fraction of the current distance covered per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Whether orbit drags rotate the camera.
    #[schemars(title = "Orbit")]
    pub enable_orbit: bool,
    /// Whether pan drags translate the camera.
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Whether scrolling zooms the camera.
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.2,
            pan_speed: 0.01,
            zoom_speed: 0.1,
            enable_orbit: true,
            enable_pan: true,
            enable_zoom: true,
        }
    }
}
