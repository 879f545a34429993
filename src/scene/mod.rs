//! The displayable scene: an arena of meshes and lights, a camera, orbit
//! navigation and the render loop that repaints it.

mod camera;
mod orbit;
mod render_loop;

pub use camera::{aspect_ratio, Camera};
pub use orbit::OrbitControls;
pub use render_loop::{FrameStats, LoopState, RenderLoop, Renderer};

use slotmap::SlotMap;

use crate::error::Result;
use crate::extrusion::{Lighting, Material, Prism, SceneDescription};
use crate::math::Isometry3;
use crate::tessellation::TriangleMesh;

slotmap::new_key_type! {
    /// Unique identifier for an object in a [`Scene`].
    pub struct ObjectId;
}

/// What a mesh object represents; lets callers find objects by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wall { wall: usize },
    WallOutline { wall: usize },
    Post { corner: usize },
    Ground,
}

/// A positioned mesh.
#[derive(Debug, Clone)]
pub struct MeshObject {
    pub kind: ObjectKind,
    /// Geometry already in scene coordinates.
    pub geometry: TriangleMesh,
    pub material: Material,
    /// Placement used to build `geometry`, kept for picking and debugging.
    pub transform: Isometry3,
}

#[derive(Debug, Clone)]
pub enum SceneObject {
    Mesh(MeshObject),
    Lights(Lighting),
}

/// Central arena that owns every displayed object.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its ID.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.insert(object)
    }

    /// Removes an object, returning it if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    /// Returns a reference to the object, or `None` if it was removed.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Removes every object. IDs handed out earlier become stale.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterates over mesh objects only.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshObject> {
        self.objects.values().filter_map(|o| match o {
            SceneObject::Mesh(mesh) => Some(mesh),
            SceneObject::Lights(_) => None,
        })
    }

    /// Counts mesh objects of a given role.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&ObjectKind) -> bool) -> usize {
        self.meshes().filter(|m| pred(&m.kind)).count()
    }

    /// Adds meshes and lights for a scene description.
    ///
    /// Each wall contributes its body and its back-sided outline; each
    /// corner a post; then the ground and the lights.
    ///
    /// # Errors
    ///
    /// Returns an error if the ground cannot be triangulated.
    pub fn populate(&mut self, description: &SceneDescription) -> Result<Vec<ObjectId>> {
        let materials = &description.materials;
        let mut ids = Vec::with_capacity(description.walls.len() * 2 + description.posts.len() + 2);

        for wall in &description.walls {
            ids.push(self.add_prism(
                ObjectKind::Wall { wall: wall.wall },
                &wall.body,
                &materials.wall,
            ));
            ids.push(self.add_prism(
                ObjectKind::WallOutline { wall: wall.wall },
                &wall.outline,
                &materials.wall_outline,
            ));
        }

        for post in &description.posts {
            ids.push(self.add_prism(
                ObjectKind::Post { corner: post.corner },
                &post.body,
                &materials.post,
            ));
        }

        let ground = &description.ground;
        let geometry = ground.tessellate()?;
        ids.push(self.add(SceneObject::Mesh(MeshObject {
            kind: ObjectKind::Ground,
            geometry,
            material: ground.material.clone(),
            transform: Isometry3::identity(),
        })));

        ids.push(self.add(SceneObject::Lights(description.lighting)));
        Ok(ids)
    }

    fn add_prism(&mut self, kind: ObjectKind, prism: &Prism, material: &Material) -> ObjectId {
        self.add(SceneObject::Mesh(MeshObject {
            kind,
            geometry: prism.tessellate(material.side),
            material: material.clone(),
            transform: prism.isometry(),
        }))
    }
}
