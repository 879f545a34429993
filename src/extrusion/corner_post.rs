use crate::config::SceneConfig;
use crate::math::{Point2, Point3};

use super::prism::Prism;

/// The vertical pillar standing on one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPost {
    /// Index of the source corner in the floorplan.
    pub corner: usize,
    pub body: Prism,
}

/// Places a fixed-footprint post at `corner`, offset by `center`.
#[must_use]
pub fn build_corner_post(
    index: usize,
    corner: Point2,
    center: Point2,
    config: &SceneConfig,
) -> CornerPost {
    CornerPost {
        corner: index,
        body: Prism {
            position: Point3::new(
                corner.x - center.x,
                config.wall_elevation,
                corner.y - center.y,
            ),
            size: config.post_size,
            rotation: 0.0,
        },
    }
}
