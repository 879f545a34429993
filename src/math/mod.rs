pub mod bounds_2d;

pub use bounds_2d::Bounds2;

/// 2D point type. The drawing plane uses `(x, y)`.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. The scene uses `y` as the up axis.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid transform (rotation + translation) in 3D.
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Maps a point on the drawing plane into the scene's horizontal plane.
///
/// Drawing `(x, y)` becomes scene `(x, elevation, y)`.
#[must_use]
pub fn to_ground(point: &Point2, elevation: f64) -> Point3 {
    Point3::new(point.x, elevation, point.y)
}
