use crate::math::{Point3, Vector3};

use super::Camera;

/// Keeps the polar angle off the exact pole, where the orbit basis degenerates.
const POLE_EPSILON: f64 = 1e-6;

/// Orbit navigation around a target point.
///
/// Input calls accumulate; [`OrbitControls::update`] applies them to a
/// camera. The camera is kept at `target + r·(sin φ sin θ, cos φ, sin φ cos θ)`
/// with the polar angle `φ` clamped to `[0, max_polar_angle]`, so with the
/// default limit of π/2 it never dips below the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub target: Point3,
    pub max_polar_angle: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Scales [`OrbitControls::zoom`] steps.
    pub zoom_speed: f64,
    radius: f64,
    azimuth: f64,
    polar: f64,
    pending_azimuth: f64,
    pending_polar: f64,
    pending_scale: f64,
    pending_pan: Vector3,
}

impl OrbitControls {
    /// Binds the controls to the camera's current pose.
    #[must_use]
    pub fn new(camera: &Camera, max_polar_angle: f64) -> Self {
        let mut controls = Self {
            target: camera.target,
            max_polar_angle,
            min_distance: 0.0,
            max_distance: f64::INFINITY,
            zoom_speed: 1.0,
            radius: 0.0,
            azimuth: 0.0,
            polar: 0.0,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_scale: 1.0,
            pending_pan: Vector3::zeros(),
        };
        controls.sync(camera);
        controls
    }

    /// Re-reads the spherical pose from `camera`, dropping pending input.
    pub fn sync(&mut self, camera: &Camera) {
        self.target = camera.target;
        let offset = camera.position - camera.target;
        self.radius = offset.norm();
        self.azimuth = offset.x.atan2(offset.z);
        self.polar = if self.radius > 0.0 {
            (offset.y / self.radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        self.pending_azimuth = 0.0;
        self.pending_polar = 0.0;
        self.pending_scale = 1.0;
        self.pending_pan = Vector3::zeros();
    }

    /// Orbits by the given angles in radians.
    pub fn rotate(&mut self, azimuth: f64, polar: f64) {
        self.pending_azimuth += azimuth;
        self.pending_polar += polar;
    }

    /// Moves toward (`steps > 0`) or away from the target.
    pub fn zoom(&mut self, steps: f64) {
        self.pending_scale *= 0.95_f64.powf(steps * self.zoom_speed);
    }

    /// Slides camera and target together, in screen-aligned units.
    pub fn pan(&mut self, camera: &Camera, dx: f64, dy: f64) {
        let forward = camera.forward();
        let right = forward
            .cross(&Vector3::y())
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::x);
        let up = right.cross(&forward);
        self.pending_pan += right * -dx + up * dy;
    }

    /// Current polar angle from the vertical axis.
    #[must_use]
    pub fn polar_angle(&self) -> f64 {
        self.polar
    }

    #[must_use]
    pub fn azimuth_angle(&self) -> f64 {
        self.azimuth
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.radius
    }

    /// Applies pending input and writes the resulting pose into `camera`.
    ///
    /// Returns `true` if the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        self.azimuth += self.pending_azimuth;
        self.polar = (self.polar + self.pending_polar)
            .clamp(POLE_EPSILON, self.max_polar_angle.max(POLE_EPSILON));
        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan;

        self.pending_azimuth = 0.0;
        self.pending_polar = 0.0;
        self.pending_scale = 1.0;
        self.pending_pan = Vector3::zeros();

        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let offset = Vector3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.radius;
        let position = self.target + offset;

        let moved = position != camera.position || self.target != camera.target;
        camera.position = position;
        camera.target = self.target;
        moved
    }
}
