use glam::{Quat, Vec3};

use super::core::{CameraLimits, PARALLEL_EPSILON};

/// World axis a fixed-up camera is pinned to.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Up-vector policy of a simple (non-orbit) camera.
///
/// With `fixed_up` the up vector is reset to [`WORLD_UP`] on every rotation
/// and the polar angle is clamped, so repeated drags cannot accumulate roll.
/// Without it the up vector is rotated together with the eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimpleState {
    fixed_up: bool,
}

impl SimpleState {
    /// Create a state with the given up-vector policy.
    #[must_use]
    pub fn new(fixed_up: bool) -> Self {
        Self { fixed_up }
    }

    /// Whether the up vector is pinned to [`WORLD_UP`].
    #[must_use]
    pub fn fixed_up(&self) -> bool {
        self.fixed_up
    }

    /// Up vector for a freshly placed camera looking along unit `front`.
    pub(crate) fn initial_up(self, front: Vec3) -> Vec3 {
        if self.fixed_up {
            return WORLD_UP;
        }
        let right = front.cross(WORLD_UP);
        if right.length() <= PARALLEL_EPSILON {
            // looking straight up or down: any roll is as good as another
            front.any_orthonormal_vector()
        } else {
            right.normalize().cross(front)
        }
    }

    /// Rotate the eye `offset` around the target, returning the new offset
    /// and up vector.
    pub(crate) fn rotate(
        self,
        offset: Vec3,
        up: Vec3,
        delta_phi: f32,
        delta_theta: f32,
        limits: &CameraLimits,
    ) -> (Vec3, Vec3) {
        if self.fixed_up {
            Self::rotate_pinned(offset, delta_phi, delta_theta, limits)
        } else {
            Self::rotate_free(offset, up, delta_phi, delta_theta)
        }
    }

    fn rotate_pinned(
        offset: Vec3,
        delta_phi: f32,
        delta_theta: f32,
        limits: &CameraLimits,
    ) -> (Vec3, Vec3) {
        let offset = Quat::from_axis_angle(WORLD_UP, delta_phi) * offset;
        let dir = offset.normalize();
        let theta = dir.dot(WORLD_UP).clamp(-1.0, 1.0).acos();
        let pitch_axis = WORLD_UP.cross(dir).normalize_or_zero();
        if pitch_axis == Vec3::ZERO {
            return (offset, WORLD_UP);
        }
        let pitch = limits.clamp_polar(theta + delta_theta) - theta;
        (Quat::from_axis_angle(pitch_axis, pitch) * offset, WORLD_UP)
    }

    fn rotate_free(
        offset: Vec3,
        up: Vec3,
        delta_phi: f32,
        delta_theta: f32,
    ) -> (Vec3, Vec3) {
        let offset = Quat::from_axis_angle(up, delta_phi) * offset;
        let pitch_axis = up.cross(offset.normalize()).normalize_or_zero();
        if pitch_axis == Vec3::ZERO {
            return (offset, up);
        }
        let pitch = Quat::from_axis_angle(pitch_axis, delta_theta);
        let offset = pitch * offset;

        // keep up orthogonal to the view axis so float error cannot tilt it
        let dir = offset.normalize();
        let up = pitch * up;
        let up = (up - dir * up.dot(dir)).normalize_or_zero();
        if up == Vec3::ZERO {
            return (offset, dir.any_orthonormal_vector());
        }
        (offset, up)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn fixed_up_initial_up_is_world_axis() {
        let state = SimpleState::new(true);
        assert_eq!(state.initial_up(Vec3::new(0.3, 0.2, -0.9).normalize()), WORLD_UP);
    }

    #[test]
    fn free_initial_up_is_orthogonal_to_front() {
        let front = Vec3::new(1.0, -1.0, 0.0).normalize();
        let up = SimpleState::new(false).initial_up(front);
        assert!(up.dot(front).abs() < 1e-6);
        assert!(up.y > 0.0);
        assert!((up.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn free_initial_up_handles_vertical_front() {
        let up = SimpleState::new(false).initial_up(-Vec3::Y);
        assert!(up.dot(Vec3::Y).abs() < 1e-6);
        assert!((up.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pinned_rotation_never_leaves_world_up() {
        let limits = CameraLimits::default();
        let state = SimpleState::new(true);
        let mut offset = Vec3::new(0.0, 0.0, 6.0);
        let mut up = WORLD_UP;
        for _ in 0..50 {
            (offset, up) = state.rotate(offset, up, 0.3, 0.2, &limits);
            assert_eq!(up, WORLD_UP);
        }
        let theta = offset.normalize().dot(WORLD_UP).acos();
        assert!(theta <= PI - limits.polar_margin() + 1e-4);
        assert!((offset.length() - 6.0).abs() < 1e-3);
    }

    #[test]
    fn pinned_yaw_matches_orbit_convention() {
        let (offset, _) = SimpleState::new(true).rotate(
            Vec3::new(0.0, 0.0, 5.0),
            WORLD_UP,
            FRAC_PI_2,
            0.0,
            &CameraLimits::default(),
        );
        assert!(offset.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn free_rotation_carries_up_over_the_pole() {
        let state = SimpleState::new(false);
        let (offset, up) = state.rotate(
            Vec3::new(0.0, 0.0, 5.0),
            WORLD_UP,
            0.0,
            -PI,
            &CameraLimits::default(),
        );
        // half a turn over the top lands behind the target upside down
        assert!(offset.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));
        assert!(up.abs_diff_eq(-WORLD_UP, 1e-4));
    }
}
