pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type for unrounded geometry.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Slope sentinel for vertical lines, where `y = mx + b` has no finite `m`.
pub const VERTICAL_SLOPE: f64 = f64::NEG_INFINITY;
