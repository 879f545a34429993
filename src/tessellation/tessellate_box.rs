use crate::math::{Point2, Point3, Vector3};

use super::{Side, TriangleMesh};

/// Tessellates an axis-aligned box centered on the origin.
///
/// `size` is `(width, height, depth)` along `(x, y, z)`. Each face gets its
/// own four vertices so normals stay flat: 24 vertices and 12 triangles.
/// Zero extents are allowed and produce collapsed faces.
pub struct TessellateBox {
    size: Vector3,
    side: Side,
}

/// `(normal, u, v)` per face, with `u × v = normal`.
const FACES: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Quad corners as `(u sign, v sign)`, counter-clockwise around the normal.
const QUAD: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

impl TessellateBox {
    /// Creates a new `TessellateBox` operation.
    #[must_use]
    pub fn new(size: Vector3, side: Side) -> Self {
        Self { size, side }
    }

    /// Executes the tessellation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> TriangleMesh {
        let half = self.size * 0.5;
        let mut mesh = TriangleMesh {
            vertices: Vec::with_capacity(24),
            normals: Vec::with_capacity(24),
            uvs: Vec::with_capacity(24),
            indices: Vec::with_capacity(12),
        };

        for (normal, u, v) in FACES {
            let (n, u, v) = (Vector3::from(normal), Vector3::from(u), Vector3::from(v));
            let base = mesh.vertices.len() as u32;
            for (su, sv) in QUAD {
                let offset = (n + u * su + v * sv).component_mul(&half);
                mesh.vertices.push(Point3::from(offset));
                mesh.normals.push(n);
                mesh.uvs.push(Point2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5));
            }
            mesh.indices.push([base, base + 1, base + 2]);
            mesh.indices.push([base, base + 2, base + 3]);
        }

        if self.side == Side::Back {
            mesh.invert();
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_24_vertices_and_12_triangles() {
        let mesh = TessellateBox::new(Vector3::new(10.0, 100.0, 50.0), Side::Front).execute();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.uvs.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn vertices_lie_on_half_extents() {
        let mesh = TessellateBox::new(Vector3::new(10.0, 100.0, 50.0), Side::Front).execute();
        for v in &mesh.vertices {
            assert!((v.x.abs() - 5.0).abs() < 1e-12);
            assert!((v.y.abs() - 50.0).abs() < 1e-12);
            assert!((v.z.abs() - 25.0).abs() < 1e-12);
        }
    }

    #[test]
    fn front_faces_wind_outward() {
        let mesh = TessellateBox::new(Vector3::new(2.0, 3.0, 4.0), Side::Front).execute();
        for (i, tri) in mesh.indices.iter().enumerate() {
            let winding = mesh.face_normal(i);
            let normal = mesh.normals[tri[0] as usize];
            assert!(winding.dot(&normal) > 0.0, "triangle {i} winds inward");
            let centroid = mesh.vertices[tri[0] as usize].coords;
            assert!(normal.dot(&centroid) > 0.0, "triangle {i} normal points inward");
        }
    }

    #[test]
    fn back_side_faces_inward() {
        let mesh = TessellateBox::new(Vector3::new(2.0, 3.0, 4.0), Side::Back).execute();
        for (i, tri) in mesh.indices.iter().enumerate() {
            let normal = mesh.normals[tri[0] as usize];
            assert!(mesh.face_normal(i).dot(&normal) > 0.0);
            assert!(normal.dot(&mesh.vertices[tri[0] as usize].coords) < 0.0);
        }
    }

    #[test]
    fn zero_depth_collapses_without_panicking() {
        let mesh = TessellateBox::new(Vector3::new(10.0, 100.0, 0.0), Side::Front).execute();
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.vertices.iter().all(|v| v.z.abs() < f64::EPSILON));
    }
}
