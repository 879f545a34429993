use super::{Point2, Vector2};

/// An axis-aligned bounding rectangle on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner of the rectangle.
    pub min: Point2,
    /// Maximum corner of the rectangle.
    pub max: Point2,
}

impl Bounds2 {
    /// Computes the bounds of a set of points.
    ///
    /// Each axis is folded independently, so the result does not depend on
    /// the order of `points`. Returns `None` when `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let bounds = iter.fold(Self { min: first, max: first }, |acc, p| Self {
            min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        });
        Some(bounds)
    }

    /// Midpoint of the `[min, max]` range on each axis.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Width and height of the rectangle.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns a copy grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector2::new(margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }
}
