use std::f32::consts::TAU;

use glam::Vec3;

use super::core::CameraLimits;

/// Eye offset from the target in spherical coordinates.
///
/// `theta` is the polar angle measured from `axis` (the construction up
/// vector), `phi` the azimuth measured from `reference` toward `side`.
/// `reference` is the initial eye direction projected onto the plane
/// orthogonal to `axis`, so a freshly built orbit starts at `phi = 0`.
///
/// With `axis = +Y` and the eye on `+Z`, increasing `phi` swings the eye
/// toward `+X` and increasing `theta` swings it toward `-Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    radius: f32,
    phi: f32,
    theta: f32,
    axis: Vec3,
    reference: Vec3,
    side: Vec3,
}

impl OrbitState {
    /// Decompose `offset` (eye minus target) around the unit `axis`.
    ///
    /// The caller guarantees `offset` is non-zero and not parallel to
    /// `axis`. Radius and polar angle are clamped into `limits`.
    pub(crate) fn from_offset(
        offset: Vec3,
        axis: Vec3,
        limits: &CameraLimits,
    ) -> Self {
        let radius = offset.length();
        let dir = offset / radius;
        let along_axis = dir.dot(axis);
        let theta = along_axis.clamp(-1.0, 1.0).acos();
        let reference = (dir - axis * along_axis).normalize();
        let side = axis.cross(reference);

        Self {
            radius: limits.clamp_distance(radius),
            phi: 0.0,
            theta: limits.clamp_polar(theta),
            axis,
            reference,
            side,
        }
    }

    /// Distance from the target to the eye.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth in radians, always in `[0, 2π)`.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Polar angle from the orbit axis in radians.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Unit orbit axis (the camera's up vector).
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Cartesian eye offset from the target.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let horizontal = self.reference * cos_phi + self.side * sin_phi;
        (horizontal * sin_theta + self.axis * cos_theta) * self.radius
    }

    pub(crate) fn rotate(
        &mut self,
        delta_phi: f32,
        delta_theta: f32,
        limits: &CameraLimits,
    ) {
        let mut phi = (self.phi + delta_phi).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if phi >= TAU {
            phi -= TAU;
        }
        self.phi = phi;
        self.theta = limits.clamp_polar(self.theta + delta_theta);
    }

    pub(crate) fn dolly(&mut self, delta: f32, limits: &CameraLimits) {
        self.radius = limits.clamp_distance(self.radius + delta);
    }
}
