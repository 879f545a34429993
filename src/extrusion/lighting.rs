use crate::color::Color;
use crate::config::SceneConfig;
use crate::math::Vector3;

/// Uniform fill light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f64,
}

/// Parallel light, like the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f64,
    /// Points from the scene toward the light.
    pub direction: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

#[must_use]
pub fn build_lighting(config: &SceneConfig) -> Lighting {
    Lighting {
        ambient: AmbientLight {
            color: config.ambient_color,
            intensity: config.ambient_intensity,
        },
        directional: DirectionalLight {
            color: config.sun_color,
            intensity: config.sun_intensity,
            direction: config.sun_direction,
        },
    }
}
