//! The corner/wall graph produced from a sketch.
//!
//! A [`Floorplan`] holds deduplicated corners and the walls that connect
//! them. Corners are identified by their insertion position; once added, a
//! corner is never moved, removed or renumbered, so wall indices stay valid
//! for the lifetime of the floorplan.

mod convert;
mod export;
mod segment;

pub use convert::ConvertSegments;
pub use segment::Segment;

use std::collections::BTreeMap;

use crate::error::{FloorplanError, Result};
use crate::math::Point2;

/// An edge between two corners, by index.
///
/// `corner1 == corner2` is allowed and marks a zero-length wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub corner1: usize,
    pub corner2: usize,
}

impl Wall {
    #[must_use]
    pub fn new(corner1: usize, corner2: usize) -> Self {
        Self { corner1, corner2 }
    }

    /// Returns `true` if both ends refer to the same corner.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.corner1 == self.corner2
    }
}

/// Deduplicated corners plus the walls between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Floorplan {
    corners: Vec<Point2>,
    walls: Vec<Wall>,
    floor_textures: BTreeMap<String, String>,
}

impl Floorplan {
    /// Creates an empty floorplan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Corners in insertion order; a corner's position is its index.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.corners
    }

    /// Walls in insertion order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Per-room floor textures. Reserved: nothing populates this map yet.
    #[must_use]
    pub fn floor_textures(&self) -> &BTreeMap<String, String> {
        &self.floor_textures
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty() && self.walls.is_empty()
    }

    /// Registers a corner and returns its index.
    ///
    /// If a corner with exactly the same coordinates already exists, its
    /// index is returned and nothing is added. Coordinates are compared with
    /// `==`, without tolerance.
    pub fn add_corner(&mut self, point: Point2) -> usize {
        if let Some(index) = self.corners.iter().position(|c| *c == point) {
            return index;
        }
        self.corners.push(point);
        self.corners.len() - 1
    }

    /// Appends a wall for each segment, registering its endpoints as corners.
    ///
    /// Existing corners and walls are kept: calling this twice with the same
    /// segments doubles the walls (corners stay deduplicated). Use
    /// [`ConvertSegments`] for a fresh rebuild.
    pub fn add_segments<'a, I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        for segment in segments {
            let corner1 = self.add_corner(segment.start);
            let corner2 = self.add_corner(segment.end);
            self.walls.push(Wall { corner1, corner2 });
        }
    }

    /// Resolves the two corner points of the wall at `wall_index`.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::WallNotFound`] if the wall does not exist, or
    /// [`FloorplanError::InvalidWall`] if it references a missing corner.
    pub fn wall_endpoints(&self, wall_index: usize) -> Result<(Point2, Point2)> {
        let wall = self
            .walls
            .get(wall_index)
            .ok_or(FloorplanError::WallNotFound {
                wall: wall_index,
                wall_count: self.walls.len(),
            })?;
        Ok((
            self.corner(wall_index, wall.corner1)?,
            self.corner(wall_index, wall.corner2)?,
        ))
    }

    /// Removes every corner, wall and floor texture.
    pub fn clear(&mut self) {
        self.corners.clear();
        self.walls.clear();
        self.floor_textures.clear();
    }

    fn corner(&self, wall: usize, corner: usize) -> Result<Point2> {
        self.corners
            .get(corner)
            .copied()
            .ok_or(FloorplanError::InvalidWall {
                wall,
                corner,
                corner_count: self.corners.len(),
            })
    }
}
