mod tessellate_box;
mod tessellate_polygon;

pub use tessellate_box::TessellateBox;
pub use tessellate_polygon::TessellatePolygon;

use crate::math::{Isometry3, Point2, Point3, Vector3};

/// Which faces of a surface are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Visible from outside.
    #[default]
    Front,
    /// Visible from inside only: winding and normals are inverted.
    Back,
    Double,
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Flips every triangle and normal so the mesh is seen from the other side.
    pub fn invert(&mut self) {
        for tri in &mut self.indices {
            tri.swap(1, 2);
        }
        for n in &mut self.normals {
            *n = -*n;
        }
    }

    /// Moves the mesh into place.
    pub fn transform(&mut self, isometry: &Isometry3) {
        for v in &mut self.vertices {
            *v = isometry * *v;
        }
        for n in &mut self.normals {
            *n = isometry * *n;
        }
    }

    /// Geometric normal of triangle `i`, from its winding.
    #[must_use]
    pub fn face_normal(&self, i: usize) -> Vector3 {
        let [a, b, c] = self.indices[i].map(|k| self.vertices[k as usize]);
        (b - a).cross(&(c - a))
    }
}
