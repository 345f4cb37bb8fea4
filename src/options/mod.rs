//! Camera options with TOML preset support.
//!
//! Projection, limits, gesture controls and initial placement are
//! consolidated here. Options serialize to/from TOML so each sample can ship
//! a preset instead of hard-coding its camera setup.

mod camera;
mod controls;
mod placement;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use placement::{CameraModel, PlacementOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::CameraError;
use crate::input::CameraRig;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection and limit parameters.
    pub camera: CameraOptions,
    /// Gesture sensitivities and toggles.
    pub controls: ControlOptions,
    /// Initial camera placement.
    pub placement: PlacementOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read camera options {}: {e}", path.display());
            CameraError::Io(e)
        })?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CameraError> {
        toml::from_str(content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)?;
        log::info!("Saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build the configured camera with the configured limits and scroll
    /// scale.
    pub fn build_camera(&self) -> Result<Camera, CameraError> {
        let camera = self.placement.build(self.camera.limits())?;
        Ok(camera.with_scroll_scale(self.camera.scroll_scale))
    }

    /// Build a gesture rig using the configured controls.
    #[must_use]
    pub fn rig(&self) -> CameraRig {
        CameraRig::new(self.controls.clone())
    }
}
