use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices and eye data.
///
/// Layout matches a WGSL/MSL struct of two `mat4x4<f32>` followed by two
/// `vec3<f32>` fields, each padded to 16 bytes.
pub struct CameraUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Unit direction from the eye toward the target, for lighting.
    pub front: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices looking down `-Z`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad0: 0.0,
            front: [0.0, 0.0, -1.0],
            _pad1: 0.0,
        }
    }

    /// Build a uniform from the camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera, projection: Mat4) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera, projection);
        uniform
    }

    /// Refresh every field from the camera's current state.
    pub fn update(&mut self, camera: &Camera, projection: Mat4) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.position = camera.position().to_array();
        self.front = camera.front_direction().to_array();
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
