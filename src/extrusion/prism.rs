use crate::math::{Isometry3, Point3, Vector3};
use crate::tessellation::{Side, TessellateBox, TriangleMesh};

/// A box placed in the scene: centered at `position`, extents `size`
/// along its local `(x, y, z)`, turned by `rotation` radians about the
/// vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    pub position: Point3,
    pub size: Vector3,
    pub rotation: f64,
}

impl Prism {
    /// The rigid transform taking local box coordinates into the scene.
    #[must_use]
    pub fn isometry(&self) -> Isometry3 {
        Isometry3::new(self.position.coords, Vector3::y() * self.rotation)
    }

    /// Same placement, each dimension enlarged by `margin`.
    #[must_use]
    pub fn grown(&self, margin: f64) -> Self {
        Self {
            size: self.size.add_scalar(margin),
            ..*self
        }
    }

    /// Tessellates the box in scene coordinates.
    #[must_use]
    pub fn tessellate(&self, side: Side) -> TriangleMesh {
        let mut mesh = TessellateBox::new(self.size, side).execute();
        mesh.transform(&self.isometry());
        mesh
    }
}
