use crate::config::SceneConfig;
use crate::math::{Point3, Vector3};

/// Perspective camera looking at a target point, with `+y` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    /// Creates a camera from the configured lens and pose.
    #[must_use]
    pub fn from_config(config: &SceneConfig, aspect: f64) -> Self {
        Self {
            position: config.camera_position,
            target: config.camera_target,
            fov: config.camera_fov,
            aspect,
            near: config.camera_near,
            far: config.camera_far,
        }
    }

    /// Updates the aspect ratio after a viewport resize. Empty viewports are ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if let Some(aspect) = aspect_ratio(width, height) {
            self.aspect = aspect;
        }
    }

    pub fn look_at(&mut self, target: Point3) {
        self.target = target;
    }

    /// Unit vector from the camera toward its target.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| -Vector3::z())
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> nalgebra::Matrix4<f64> {
        nalgebra::Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }

    /// Camera-to-clip transform.
    #[must_use]
    pub fn projection_matrix(&self) -> nalgebra::Matrix4<f64> {
        nalgebra::Perspective3::new(self.aspect, self.fov.to_radians(), self.near, self.far)
            .to_homogeneous()
    }
}

/// `width / height`, or `None` if either side is not a positive finite length.
#[must_use]
pub fn aspect_ratio(width: f64, height: f64) -> Option<f64> {
    let aspect = width / height;
    (width > 0.0 && height > 0.0 && aspect.is_finite()).then_some(aspect)
}
