use crate::color::Color;
use crate::math::Point2;

/// One user-drawn stroke, before it becomes a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub color: Color,
}

impl Segment {
    /// Creates a black segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            color: Color::BLACK,
        }
    }

    /// Creates a zero-length segment, the shape of a stroke that has just begun.
    #[must_use]
    pub fn at(point: Point2) -> Self {
        Self::new(point, point)
    }

    /// Euclidean length of the stroke.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Midpoint of the stroke.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }
}
