//! Scene configuration.
//!
//! Every dimension, color and light setting used by the extrusion and the
//! 3D view lives in [`SceneConfig`]. The defaults reproduce the classic
//! look: 10-unit-thick, 100-unit-tall walls on a 400×400 hardwood floor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{FloorplanError, Result};
use crate::math::{Point3, Vector3};

/// Footprint of the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GroundExtent {
    /// A fixed square centered under the scene origin.
    Fixed { width: f64, depth: f64 },
    /// The floorplan's bounding box grown by `margin` on every side.
    FitToBounds { margin: f64 },
}

/// Configuration for extrusion, materials, lighting and the 3D view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Thickness of every wall prism.
    pub wall_thickness: f64,
    /// Height of every wall prism.
    pub wall_height: f64,
    /// Vertical position of wall and post centers.
    pub wall_elevation: f64,
    /// Added to each dimension of a wall to size its outline shell.
    pub outline_margin: f64,
    /// Footprint and height of corner posts, as `(width, height, depth)`.
    pub post_size: Vector3,

    pub ground_extent: GroundExtent,
    pub ground_elevation: f64,
    /// Floor texture, relative to the asset root.
    pub floor_texture: PathBuf,
    /// Texture repeat count along `(u, v)`.
    pub floor_texture_repeat: [f64; 2],

    pub wall_color: Color,
    pub wall_outline_color: Color,
    pub post_color: Color,
    pub floor_color: Color,
    pub floor_specular: Color,

    pub ambient_color: Color,
    pub ambient_intensity: f64,
    pub sun_color: Color,
    pub sun_intensity: f64,
    /// Direction the sun shines from.
    pub sun_direction: Vector3,

    pub camera_position: Point3,
    pub camera_target: Point3,
    /// Vertical field of view in degrees.
    pub camera_fov: f64,
    pub camera_near: f64,
    pub camera_far: f64,
    /// Orbit polar angle limit; π/2 keeps the camera above the floor.
    pub max_polar_angle: f64,
    pub clear_color: Color,

    /// Spacing of the sketch grid.
    pub grid_spacing: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 10.0,
            wall_height: 100.0,
            wall_elevation: 0.0,
            outline_margin: 2.0,
            post_size: Vector3::new(10.0, 100.0, 10.0),

            ground_extent: GroundExtent::Fixed {
                width: 400.0,
                depth: 400.0,
            },
            ground_elevation: -50.0,
            floor_texture: PathBuf::from("textures/hardwood.png"),
            floor_texture_repeat: [1.0, 1.0],

            wall_color: Color(0xF0_EADC),
            wall_outline_color: Color(0xdd_dddd),
            post_color: Color(0xee_eeee),
            floor_color: Color(0xcc_cccc),
            floor_specular: Color(0x0a_0a0a),

            ambient_color: Color::WHITE,
            ambient_intensity: 0.5,
            sun_color: Color::WHITE,
            sun_intensity: 0.5,
            sun_direction: Vector3::new(1.0, 1.0, 1.0),

            camera_position: Point3::new(400.0, 400.0, 400.0),
            camera_target: Point3::origin(),
            camera_fov: 45.0,
            camera_near: 1.0,
            camera_far: 10_000.0,
            max_polar_angle: std::f64::consts::FRAC_PI_2,
            clear_color: Color(0xee_eeee),

            grid_spacing: 10.0,
        }
    }
}

impl SceneConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the resulting
    /// configuration fails [`SceneConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension is usable.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("wall_thickness", self.wall_thickness),
            ("wall_height", self.wall_height),
            ("post_size.x", self.post_size.x),
            ("post_size.y", self.post_size.y),
            ("post_size.z", self.post_size.z),
            ("camera_fov", self.camera_fov),
            ("camera_near", self.camera_near),
            ("max_polar_angle", self.max_polar_angle),
            ("grid_spacing", self.grid_spacing),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.outline_margin < 0.0 || !self.outline_margin.is_finite() {
            return Err(invalid(format!(
                "outline_margin must be non-negative, got {}",
                self.outline_margin
            )));
        }
        if self.camera_far <= self.camera_near {
            return Err(invalid("camera_far must exceed camera_near".to_owned()));
        }

        match self.ground_extent {
            GroundExtent::Fixed { width, depth } => {
                if !(width.is_finite() && depth.is_finite() && width > 0.0 && depth > 0.0) {
                    return Err(invalid(format!(
                        "fixed ground extent must be positive, got {width}×{depth}"
                    )));
                }
            }
            GroundExtent::FitToBounds { margin } => {
                if !(margin.is_finite() && margin > 0.0) {
                    return Err(invalid(
                        "fit-to-bounds ground margin must be positive".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> FloorplanError {
    FloorplanError::InvalidConfig(message)
}
