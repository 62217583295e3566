use std::fmt;

use crate::math::Point2;

/// Integer canvas coordinate.
///
/// Every computed coordinate is rounded before it becomes a `Point`, so two
/// points are the same graph vertex exactly when their integer pairs match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounds a float point to the nearest integer coordinates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(p: &Point2) -> Self {
        Self {
            x: p.x.round() as i64,
            y: p.y.round() as i64,
        }
    }

    /// Converts to a float point for slope and angle math.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point2(self) -> Point2 {
        Point2::new(self.x as f64, self.y as f64)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
