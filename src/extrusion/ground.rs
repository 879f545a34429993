use crate::config::{GroundExtent, SceneConfig};
use crate::error::Result;
use crate::math::{Bounds2, Point2, Point3};
use crate::tessellation::{TessellatePolygon, TriangleMesh};

use super::material::Material;

/// The floor under the walls.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundPlane {
    /// Outline in centered drawing-plane coordinates, counter-clockwise.
    pub outline: Vec<Point2>,
    pub elevation: f64,
    pub material: Material,
}

impl GroundPlane {
    /// Center of the outline in scene coordinates.
    #[must_use]
    pub fn position(&self) -> Point3 {
        let c = Bounds2::from_points(&self.outline).map_or_else(Point2::origin, |b| b.center());
        Point3::new(c.x, self.elevation, c.y)
    }

    /// Width and depth of the outline.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        Bounds2::from_points(&self.outline).map_or((0.0, 0.0), |b| {
            let s = b.size();
            (s.x, s.y)
        })
    }

    /// Triangulates the floor, with UVs following the texture repeat.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline cannot be triangulated.
    pub fn tessellate(&self) -> Result<TriangleMesh> {
        let repeat = self.material.map.as_ref().map_or([1.0, 1.0], |m| m.repeat);
        TessellatePolygon::new(self.outline.clone(), self.elevation)
            .with_uv_repeat(repeat)
            .execute()
    }
}

/// Builds the floor rectangle.
///
/// With [`GroundExtent::Fixed`] the floor is centered under the scene origin
/// regardless of the floorplan. With [`GroundExtent::FitToBounds`] it covers
/// `bounds` plus the margin, shifted by the same center as the walls.
#[must_use]
pub fn build_ground_plane(
    config: &SceneConfig,
    bounds: &Bounds2,
    material: Material,
) -> GroundPlane {
    let rect = match config.ground_extent {
        GroundExtent::Fixed { width, depth } => Bounds2 {
            min: Point2::new(-width / 2.0, -depth / 2.0),
            max: Point2::new(width / 2.0, depth / 2.0),
        },
        GroundExtent::FitToBounds { margin } => {
            let grown = bounds.expanded(margin);
            let shift = bounds.center().coords;
            Bounds2 {
                min: grown.min - shift,
                max: grown.max - shift,
            }
        }
    };

    GroundPlane {
        outline: vec![
            rect.min,
            Point2::new(rect.max.x, rect.min.y),
            rect.max,
            Point2::new(rect.min.x, rect.max.y),
        ],
        elevation: config.ground_elevation,
        material,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::Color;

    fn bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds2 {
        Bounds2 {
            min: Point2::new(x0, y0),
            max: Point2::new(x1, y1),
        }
    }

    #[test]
    fn fixed_ground_ignores_floorplan() {
        let config = SceneConfig::default();
        let material = Material::basic(Color::WHITE);
        let small = build_ground_plane(&config, &bounds(0.0, 0.0, 10.0, 10.0), material.clone());
        let large = build_ground_plane(&config, &bounds(0.0, 0.0, 5000.0, 900.0), material);
        assert_eq!(small.outline, large.outline);
        assert_eq!(small.extent(), (400.0, 400.0));
        assert_eq!(small.position(), Point3::new(0.0, -50.0, 0.0));
        assert_eq!(small.outline[0], Point2::new(-200.0, -200.0));
    }

    #[test]
    fn fit_ground_covers_bounds() {
        let config = SceneConfig {
            ground_extent: GroundExtent::FitToBounds { margin: 25.0 },
            ..SceneConfig::default()
        };
        let plane = build_ground_plane(
            &config,
            &bounds(0.0, 0.0, 300.0, 100.0),
            Material::basic(Color::WHITE),
        );
        let (w, d) = plane.extent();
        assert_relative_eq!(w, 350.0);
        assert_relative_eq!(d, 150.0);
        assert_eq!(plane.position(), Point3::new(0.0, -50.0, 0.0));
    }

    #[test]
    fn tessellates_to_two_triangles() {
        let plane = build_ground_plane(
            &SceneConfig::default(),
            &bounds(0.0, 0.0, 1.0, 1.0),
            Material::basic(Color::WHITE),
        );
        let mesh = plane.tessellate().unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| (v.y + 50.0).abs() < 1e-12));
    }
}
