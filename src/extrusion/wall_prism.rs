use crate::config::SceneConfig;
use crate::math::{Point2, Point3, Vector3};

use super::prism::Prism;

/// The extruded form of one wall, plus its border shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPrism {
    /// Index of the source wall in the floorplan.
    pub wall: usize,
    /// Distance between the two corners; the prism's depth.
    pub length: f64,
    pub body: Prism,
    /// Drawn back-side only, so it shows as a border around `body`.
    pub outline: Prism,
}

/// Extrudes the wall between `a` and `b`.
///
/// The prism is `thickness × height × length`, centered on the segment
/// midpoint minus `center`, and turned by `atan2(dx, dy)` about the vertical
/// axis so its depth runs along the wall. A zero-length wall yields a flat
/// slab with rotation 0.
#[must_use]
pub fn build_wall_prism(
    wall: usize,
    a: Point2,
    b: Point2,
    center: Point2,
    config: &SceneConfig,
) -> WallPrism {
    let delta = b - a;
    let length = delta.norm();
    let mid = nalgebra::center(&a, &b);

    let body = Prism {
        position: Point3::new(mid.x - center.x, config.wall_elevation, mid.y - center.y),
        size: Vector3::new(config.wall_thickness, config.wall_height, length),
        rotation: delta.x.atan2(delta.y),
    };

    WallPrism {
        wall,
        length,
        body,
        outline: body.grown(config.outline_margin),
    }
}
