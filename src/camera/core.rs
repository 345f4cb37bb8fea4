use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use super::orbit::OrbitState;
use super::simple::SimpleState;
use crate::error::{CameraError, GeometryFault};

/// Eye-target distances at or below this are treated as coincident.
pub(crate) const GEOMETRY_EPSILON: f32 = 1e-6;
/// Sine of the smallest angle accepted between `up` and the view direction.
pub(crate) const PARALLEL_EPSILON: f32 = 1e-4;
/// Largest relative change of the eye-target offset a pan may cause.
const TRANSLATION_DRIFT: f32 = 1e-3;
/// Legacy scroll-to-zoom factor (world units per scroll unit).
pub const DEFAULT_SCROLL_SCALE: f32 = 0.05;

/// Bounds applied to every camera mutation.
///
/// Values are sanitized on construction. Non-finite distances fall back to
/// the defaults (as does a non-positive minimum), the maximum is never below
/// the minimum, and the polar margin stays inside `[1e-4, 1.0]` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    min_distance: f32,
    max_distance: f32,
    polar_margin: f32,
}

impl CameraLimits {
    /// Default closest approach to the target.
    pub const DEFAULT_MIN_DISTANCE: f32 = 0.1;
    /// Default farthest distance from the target.
    pub const DEFAULT_MAX_DISTANCE: f32 = 1.0e4;
    /// Default gap kept between the polar angle and either pole (radians).
    pub const DEFAULT_POLAR_MARGIN: f32 = 0.01;

    const MIN_POLAR_MARGIN: f32 = 1e-4;
    const MAX_POLAR_MARGIN: f32 = 1.0;

    /// Build limits from raw values, sanitizing them.
    #[must_use]
    pub fn new(min_distance: f32, max_distance: f32, polar_margin: f32) -> Self {
        let min_distance = if min_distance.is_finite() && min_distance > 0.0 {
            min_distance
        } else {
            Self::DEFAULT_MIN_DISTANCE
        };
        let max_distance = if !max_distance.is_finite() {
            Self::DEFAULT_MAX_DISTANCE.max(min_distance)
        } else if max_distance >= min_distance {
            max_distance
        } else {
            min_distance
        };
        let polar_margin = if polar_margin.is_nan() {
            Self::DEFAULT_POLAR_MARGIN
        } else {
            polar_margin.clamp(Self::MIN_POLAR_MARGIN, Self::MAX_POLAR_MARGIN)
        };

        Self {
            min_distance,
            max_distance,
            polar_margin,
        }
    }

    /// Closest allowed eye-target distance.
    #[must_use]
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Farthest allowed eye-target distance.
    #[must_use]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Gap kept between the polar angle and either pole (radians).
    #[must_use]
    pub fn polar_margin(&self) -> f32 {
        self.polar_margin
    }

    /// Clamp an eye-target distance. `distance` must not be NaN.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        let clamped = distance.clamp(self.min_distance, self.max_distance);
        if clamped != distance {
            log::trace!("camera distance {distance} clamped to {clamped}");
        }
        clamped
    }

    /// Clamp a polar angle into `[margin, π - margin]`.
    #[must_use]
    pub fn clamp_polar(&self, theta: f32) -> f32 {
        theta.clamp(self.polar_margin, PI - self.polar_margin)
    }
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            polar_margin: Self::DEFAULT_POLAR_MARGIN,
        }
    }
}

/// Variant-specific camera state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraKind {
    /// Free look-at camera with an up-vector policy.
    Simple(SimpleState),
    /// Camera parameterized by spherical coordinates around its target.
    Orbit(OrbitState),
}

/// Look-at camera defined by eye position, target and up vector.
///
/// The placement invariants (`position != target`, `up` not parallel to the
/// view direction) are checked at construction; every mutation afterwards
/// is total and keeps them by clamping distance and polar angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    kind: CameraKind,
    limits: CameraLimits,
    scroll_scale: f32,
}

impl Camera {
    /// Place a simple camera with an explicit up vector that follows
    /// rotations.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Self, CameraError> {
        let up = validate_placement(position, target, up)?;
        Ok(Self::place_simple(
            position,
            target,
            up,
            SimpleState::new(false),
        ))
    }

    /// Place a simple camera whose up vector is either pinned to world `+Y`
    /// (`fixed_up`) or derived from the view direction and carried along by
    /// rotations.
    pub fn simple(
        position: Vec3,
        target: Vec3,
        fixed_up: bool,
    ) -> Result<Self, CameraError> {
        let state = SimpleState::new(fixed_up);
        let front = validate_points(position, target)?;
        let up = validate_placement(position, target, state.initial_up(front))?;
        Ok(Self::place_simple(position, target, up, state))
    }

    /// Place an orbit camera around `target`, using `up` as the orbit axis.
    pub fn orbit(
        position: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Self, CameraError> {
        let axis = validate_placement(position, target, up)?;
        let limits = CameraLimits::default();
        let state = OrbitState::from_offset(position - target, axis, &limits);

        Ok(Self {
            position: target + state.offset(),
            target,
            up: axis,
            kind: CameraKind::Orbit(state),
            limits,
            scroll_scale: DEFAULT_SCROLL_SCALE,
        })
    }

    fn place_simple(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        state: SimpleState,
    ) -> Self {
        let mut camera = Self {
            position,
            target,
            up,
            kind: CameraKind::Simple(state),
            limits: CameraLimits::default(),
            scroll_scale: DEFAULT_SCROLL_SCALE,
        };
        camera.move_along_direction(0.0);
        if state.fixed_up() {
            camera.rotate_around_target(0.0, 0.0);
        }
        camera
    }

    /// Replace the limits, re-clamping the current placement.
    #[must_use]
    pub fn with_limits(mut self, limits: CameraLimits) -> Self {
        self.set_limits(limits);
        self
    }

    /// Replace the legacy scroll-to-zoom factor.
    #[must_use]
    pub fn with_scroll_scale(mut self, scroll_scale: f32) -> Self {
        self.set_scroll_scale(scroll_scale);
        self
    }

    /// Replace the limits, re-clamping the current placement.
    pub fn set_limits(&mut self, limits: CameraLimits) {
        self.limits = limits;
        self.move_along_direction(0.0);
        let clamps_polar = match self.kind {
            CameraKind::Orbit(_) => true,
            CameraKind::Simple(state) => state.fixed_up(),
        };
        if clamps_polar {
            self.rotate_around_target(0.0, 0.0);
        }
    }

    /// Replace the legacy scroll-to-zoom factor. Non-finite values are
    /// ignored.
    pub fn set_scroll_scale(&mut self, scroll_scale: f32) {
        if scroll_scale.is_finite() {
            self.scroll_scale = scroll_scale;
        }
    }

    /// Right-handed world-to-eye transform, recomputed on every call.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn front_direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right_direction(&self) -> Vec3 {
        self.front_direction().cross(self.up).normalize()
    }

    /// Unit camera-space up (orthogonal to the front direction).
    #[must_use]
    pub fn up_direction(&self) -> Vec3 {
        self.right_direction().cross(self.front_direction())
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target in world space.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Roll reference passed to the look-at transform.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current eye-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        match &self.kind {
            CameraKind::Orbit(state) => state.radius(),
            CameraKind::Simple(_) => self.position.distance(self.target),
        }
    }

    /// Variant-specific state.
    #[must_use]
    pub fn kind(&self) -> &CameraKind {
        &self.kind
    }

    /// Active distance and angle limits.
    #[must_use]
    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// Legacy scroll-to-zoom factor.
    #[must_use]
    pub fn scroll_scale(&self) -> f32 {
        self.scroll_scale
    }

    /// Pan: translate position and target together.
    pub fn move_with_translation(&mut self, translation: Vec3) {
        let offset = self.position - self.target;
        let position = self.position + translation;
        let target = self.target + translation;
        let drift = (position - target).distance(offset);
        // NaN drift fails the comparison too
        if !(position.is_finite()
            && target.is_finite()
            && drift <= offset.length() * TRANSLATION_DRIFT)
        {
            log::trace!(
                "dropping camera translation {translation}: eye-target offset not representable"
            );
            return;
        }
        self.position = position;
        self.target = target;
    }

    /// Change the eye-target distance by `delta` along the view axis.
    ///
    /// Positive values move away from the target. The result is clamped to
    /// the distance limits, so the eye never reaches or crosses the target.
    pub fn move_along_direction(&mut self, delta: f32) {
        if delta.is_nan() {
            log::trace!("dropping NaN camera dolly");
            return;
        }
        match &mut self.kind {
            CameraKind::Orbit(state) => {
                state.dolly(delta, &self.limits);
                self.position = self.target + state.offset();
            }
            CameraKind::Simple(_) => {
                let offset = self.position - self.target;
                let distance = offset.length();
                let clamped = self.limits.clamp_distance(distance + delta);
                self.position = self.target + offset * (clamped / distance);
            }
        }
    }

    /// Swing the eye around the target by azimuth `delta_phi` and polar
    /// `delta_theta` (radians).
    pub fn rotate_around_target(&mut self, delta_phi: f32, delta_theta: f32) {
        if !(delta_phi.is_finite() && delta_theta.is_finite()) {
            log::trace!(
                "dropping non-finite camera rotation ({delta_phi}, {delta_theta})"
            );
            return;
        }
        match &mut self.kind {
            CameraKind::Orbit(state) => {
                state.rotate(delta_phi, delta_theta, &self.limits);
                self.position = self.target + state.offset();
            }
            CameraKind::Simple(state) => {
                let (offset, up) = state.rotate(
                    self.position - self.target,
                    self.up,
                    delta_phi,
                    delta_theta,
                    &self.limits,
                );
                self.position = self.target + offset;
                self.up = up;
            }
        }
    }

    /// Legacy scroll handler: zooms by `-delta_y * scroll_scale`.
    ///
    /// Positive `delta_y` (scrolling up) moves toward the target. The
    /// horizontal delta is accepted for trackpad symmetry and ignored.
    pub fn handle_mouse_scroll_delta(&mut self, _delta_x: f32, delta_y: f32) {
        self.move_along_direction(-delta_y * self.scroll_scale);
    }
}

/// Reject non-finite or coincident points, returning the unit front vector.
fn validate_points(position: Vec3, target: Vec3) -> Result<Vec3, GeometryFault> {
    if !(position.is_finite() && target.is_finite()) {
        return Err(GeometryFault::NonFinite);
    }
    let view = target - position;
    let distance = view.length();
    if !distance.is_finite() {
        return Err(GeometryFault::NonFinite);
    }
    if distance <= GEOMETRY_EPSILON {
        return Err(GeometryFault::CoincidentTarget);
    }
    Ok(view / distance)
}

/// Full placement check, returning the normalized up vector.
fn validate_placement(
    position: Vec3,
    target: Vec3,
    up: Vec3,
) -> Result<Vec3, GeometryFault> {
    let front = validate_points(position, target)?;
    if !up.is_finite() {
        return Err(GeometryFault::NonFinite);
    }
    let up_length = up.length();
    if up_length <= GEOMETRY_EPSILON {
        return Err(GeometryFault::ZeroUp);
    }
    let up = up / up_length;
    if front.cross(up).length() <= PARALLEL_EPSILON {
        return Err(GeometryFault::UpParallelToView);
    }
    Ok(up)
}
