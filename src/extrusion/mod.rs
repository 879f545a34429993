//! Turns a [`Floorplan`] into renderer-independent 3D primitives.
//!
//! Drawing-plane `(x, y)` maps to scene `(x, z)`; scene `y` is up. Every
//! primitive is shifted by the floorplan's bounding center so the model
//! sits around the origin.

mod corner_post;
mod ground;
mod lighting;
mod material;
mod prism;
mod texture;
mod wall_prism;

pub use corner_post::{build_corner_post, CornerPost};
pub use ground::{build_ground_plane, GroundPlane};
pub use lighting::{build_lighting, AmbientLight, DirectionalLight, Lighting};
pub use material::{Material, SceneMaterials, Shading, TextureMap};
pub use prism::Prism;
pub use texture::{FsTextureLoader, MemoryTextureLoader, TextureImage, TextureLoader};
pub use wall_prism::{build_wall_prism, WallPrism};

use tracing::debug;

use crate::config::SceneConfig;
use crate::error::{FloorplanError, Result};
use crate::floorplan::Floorplan;
use crate::math::{Bounds2, Point2};

/// Midpoint of the corners' extent on each axis.
///
/// # Errors
///
/// Returns [`FloorplanError::EmptyFloorplan`] if `corners` is empty.
pub fn compute_bounding_center(corners: &[Point2]) -> Result<Point2> {
    Bounds2::from_points(corners)
        .map(|b| b.center())
        .ok_or(FloorplanError::EmptyFloorplan)
}

/// Everything needed to display one floorplan.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    /// Bounding center subtracted from every primitive.
    pub center: Point2,
    pub bounds: Bounds2,
    pub walls: Vec<WallPrism>,
    pub posts: Vec<CornerPost>,
    pub ground: GroundPlane,
    pub lighting: Lighting,
    pub materials: SceneMaterials,
}

/// Extrudes a floorplan in a single stateless pass.
pub struct ExtrudeFloorplan<'a> {
    floorplan: &'a Floorplan,
    config: &'a SceneConfig,
}

impl<'a> ExtrudeFloorplan<'a> {
    /// Creates a new `ExtrudeFloorplan` operation.
    #[must_use]
    pub fn new(floorplan: &'a Floorplan, config: &'a SceneConfig) -> Self {
        Self { floorplan, config }
    }

    /// Executes the extrusion, loading the floor texture through `textures`.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::EmptyFloorplan`] if the floorplan has no
    /// corners, or [`FloorplanError::InvalidWall`] if a wall references a
    /// missing corner.
    pub fn execute(&self, textures: &dyn TextureLoader) -> Result<SceneDescription> {
        let corners = self.floorplan.corners();
        let bounds = Bounds2::from_points(corners).ok_or(FloorplanError::EmptyFloorplan)?;
        let center = bounds.center();

        let walls = (0..self.floorplan.walls().len())
            .map(|i| {
                let (a, b) = self.floorplan.wall_endpoints(i)?;
                Ok(build_wall_prism(i, a, b, center, self.config))
            })
            .collect::<Result<Vec<_>>>()?;

        let posts = corners
            .iter()
            .enumerate()
            .map(|(i, &corner)| build_corner_post(i, corner, center, self.config))
            .collect();

        let materials = SceneMaterials::new(self.config, textures);
        let ground = build_ground_plane(self.config, &bounds, materials.floor.clone());

        debug!(
            walls = walls.len(),
            posts = corners.len(),
            center_x = center.x,
            center_y = center.y,
            "extruded floorplan"
        );

        Ok(SceneDescription {
            center,
            bounds,
            walls,
            posts,
            ground,
            lighting: build_lighting(self.config),
            materials,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::floorplan::{ConvertSegments, Segment};
    use crate::math::Point3;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn triangle() -> Floorplan {
        ConvertSegments::new(&[
            seg(0.0, 0.0, 100.0, 0.0),
            seg(100.0, 0.0, 100.0, 100.0),
            seg(100.0, 100.0, 0.0, 0.0),
        ])
        .execute()
    }

    #[test]
    fn bounding_center_of_triangle() {
        let center = compute_bounding_center(triangle().corners()).unwrap();
        assert_eq!(center, Point2::new(50.0, 50.0));
    }

    #[test]
    fn bounding_center_of_nothing_is_an_error() {
        assert!(matches!(
            compute_bounding_center(&[]),
            Err(FloorplanError::EmptyFloorplan)
        ));
    }

    #[test]
    fn one_prism_per_wall_one_post_per_corner() {
        let plan = triangle();
        let config = SceneConfig::default();
        let scene = ExtrudeFloorplan::new(&plan, &config)
            .execute(&MemoryTextureLoader::new())
            .unwrap();
        assert_eq!(scene.walls.len(), 3);
        assert_eq!(scene.posts.len(), 3);
        assert_eq!(scene.center, Point2::new(50.0, 50.0));
        assert_eq!(scene.posts[0].body.position, Point3::new(-50.0, 0.0, -50.0));
    }

    #[test]
    fn diagonal_wall_length_and_rotation() {
        let plan = triangle();
        let config = SceneConfig::default();
        let scene = ExtrudeFloorplan::new(&plan, &config)
            .execute(&MemoryTextureLoader::new())
            .unwrap();
        let diagonal = &scene.walls[2];
        assert_relative_eq!(diagonal.length, 100.0 * 2f64.sqrt(), epsilon = 1e-9);
        // (100,100) → (0,0): dx = dy = -100
        assert_relative_eq!(
            diagonal.body.rotation,
            (-100f64).atan2(-100.0),
            epsilon = 1e-12
        );
        assert_eq!(diagonal.body.position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn empty_floorplan_is_rejected() {
        let plan = Floorplan::new();
        let config = SceneConfig::default();
        let result = ExtrudeFloorplan::new(&plan, &config).execute(&MemoryTextureLoader::new());
        assert!(matches!(result, Err(FloorplanError::EmptyFloorplan)));
    }

    #[test]
    fn posts_do_not_depend_on_wall_count() {
        let segments = [seg(0.0, 0.0, 10.0, 0.0), seg(0.0, 0.0, 10.0, 0.0)];
        let plan = ConvertSegments::new(&segments).execute();
        let config = SceneConfig::default();
        let scene = ExtrudeFloorplan::new(&plan, &config)
            .execute(&MemoryTextureLoader::new())
            .unwrap();
        assert_eq!(scene.walls.len(), 2);
        assert_eq!(scene.posts.len(), 2);
    }
}
