use std::collections::HashMap;

use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{FloorplanError, Result};
use crate::math::{to_ground, Bounds2, Point2, Vector3};

use super::TriangleMesh;

/// Tessellates a simple polygon lying flat in the scene's horizontal plane.
///
/// The outline is given in drawing-plane coordinates and placed at
/// `elevation`. Triangles face up (`+y`). UVs span `[0, repeat]` across the
/// polygon's bounding box.
pub struct TessellatePolygon {
    outline: Vec<Point2>,
    elevation: f64,
    repeat: [f64; 2],
}

impl TessellatePolygon {
    /// Creates a new `TessellatePolygon` operation.
    #[must_use]
    pub fn new(outline: Vec<Point2>, elevation: f64) -> Self {
        Self {
            outline,
            elevation,
            repeat: [1.0, 1.0],
        }
    }

    /// Sets how many times the texture repeats across the polygon.
    #[must_use]
    pub fn with_uv_repeat(mut self, repeat: [f64; 2]) -> Self {
        self.repeat = repeat;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Triangulation`] if the outline has fewer than
    /// three points or contains coordinates the triangulation rejects.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let bounds = Bounds2::from_points(&self.outline).ok_or_else(|| {
            FloorplanError::Triangulation("polygon outline is empty".to_owned())
        })?;
        let size = bounds.size();

        let cdt = constrained_outline(&self.outline)?;

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();
        let up = Vector3::y();

        for face_handle in cdt.inner_faces() {
            // Constraint edges split every triangle cleanly, so its centroid
            // decides which side of the outline it lies on.
            let [a, b, c] = face_handle.positions();
            let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
            if !encloses(&self.outline, &centroid) {
                continue;
            }

            let mut tri = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                tri[i] = *vertex_map.entry(idx).or_insert_with(|| {
                    let pos = vh.position();
                    let p = Point2::new(pos.x, pos.y);
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(to_ground(&p, self.elevation));
                    mesh.normals.push(up);
                    mesh.uvs.push(Point2::new(
                        uv(p.x - bounds.min.x, size.x) * self.repeat[0],
                        uv(p.y - bounds.min.y, size.y) * self.repeat[1],
                    ));
                    new_idx
                });
            }

            // Spade winds counter-clockwise in (x, y); mapped to (x, z) that
            // faces down, so swap to face up.
            tri.swap(1, 2);
            mesh.indices.push(tri);
        }

        Ok(mesh)
    }
}

fn uv(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset / extent
    } else {
        0.0
    }
}

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the outline's points with every outline edge forced in.
fn constrained_outline(outline: &[Point2]) -> Result<Cdt> {
    if outline.len() < 3 {
        return Err(FloorplanError::Triangulation(format!(
            "outline needs at least 3 points, got {}",
            outline.len()
        )));
    }

    let mut cdt = Cdt::new();
    let handles = outline
        .iter()
        .map(|p| cdt.insert(SpadePoint2::new(p.x, p.y)))
        .collect::<std::result::Result<Vec<_>, InsertionError>>()
        .map_err(|e| FloorplanError::Triangulation(format!("outline point rejected: {e}")))?;

    for (&from, &to) in handles.iter().zip(handles.iter().cycle().skip(1)) {
        if from != to {
            cdt.add_constraint(from, to);
        }
    }
    Ok(cdt)
}

/// Even-odd test of `point` against the closed `outline`.
fn encloses(outline: &[Point2], point: &Point2) -> bool {
    let mut inside = false;
    for (a, b) in outline.iter().zip(outline.iter().cycle().skip(1)) {
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square(size: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ]
    }

    #[test]
    fn square_makes_two_upward_triangles() {
        let mesh = TessellatePolygon::new(square(400.0), -50.0).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices.len(), 4);
        for i in 0..mesh.triangle_count() {
            assert!(mesh.face_normal(i).y > 0.0);
        }
        assert!(mesh.vertices.iter().all(|v| (v.y + 50.0).abs() < 1e-12));
    }

    #[test]
    fn uvs_span_repeat() {
        let mesh = TessellatePolygon::new(square(10.0), 0.0)
            .with_uv_repeat([2.0, 3.0])
            .execute()
            .unwrap();
        let max_u = mesh.uvs.iter().map(|t| t.x).fold(f64::MIN, f64::max);
        let max_v = mesh.uvs.iter().map(|t| t.y).fold(f64::MIN, f64::max);
        assert!((max_u - 2.0).abs() < 1e-12);
        assert!((max_v - 3.0).abs() < 1e-12);
    }

    #[test]
    fn concave_outline_excludes_notch() {
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let mesh = TessellatePolygon::new(l_shape, 0.0).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 4);
        for tri in &mesh.indices {
            let c = tri.map(|k| mesh.vertices[k as usize].coords).iter().sum::<Vector3>() / 3.0;
            assert!(!(c.x > 2.0 && c.z > 2.0), "triangle inside the notch");
        }
    }

    #[test]
    fn encloses_uses_even_odd_rule() {
        let outline = square(10.0);
        assert!(encloses(&outline, &Point2::new(5.0, 5.0)));
        assert!(!encloses(&outline, &Point2::new(15.0, 5.0)));
        assert!(!encloses(&outline, &Point2::new(5.0, -1.0)));
    }

    #[test]
    fn too_few_points_fails() {
        let result = TessellatePolygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], 0.0)
            .execute();
        assert!(result.is_err());
    }
}
