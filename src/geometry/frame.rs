use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Point;

/// One of the four sides of a [`Frame`].
///
/// The discriminants are the side indices `0..4`; side `i` is opposite side
/// `(i + 2) % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameSide {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl FrameSide {
    /// All sides in classification priority order.
    pub const ALL: [FrameSide; 4] = [
        FrameSide::Left,
        FrameSide::Top,
        FrameSide::Right,
        FrameSide::Bottom,
    ];

    /// Side index: 0=left, 1=top, 2=right, 3=bottom.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side across the frame.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Left and right sides are vertical borders (constant x).
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Axis-aligned rectangle all geometry is built inside.
///
/// Canvas coordinates: `top < bottom` because y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Frame {
    /// Creates a frame from its four border coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFrame` unless `left < right` and `top < bottom`.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Result<Self> {
        if left >= right || top >= bottom {
            return Err(GeometryError::InvalidFrame {
                left,
                top,
                right,
                bottom,
            }
            .into());
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> i64 {
        self.top
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Border coordinate of a side: x for left/right, y for top/bottom.
    #[must_use]
    pub fn border(&self, side: FrameSide) -> i64 {
        match side {
            FrameSide::Left => self.left,
            FrameSide::Top => self.top,
            FrameSide::Right => self.right,
            FrameSide::Bottom => self.bottom,
        }
    }

    /// The two corners bounding a side, in increasing coordinate order.
    #[must_use]
    pub fn corners(&self, side: FrameSide) -> (Point, Point) {
        match side {
            FrameSide::Left => (
                Point::new(self.left, self.top),
                Point::new(self.left, self.bottom),
            ),
            FrameSide::Top => (
                Point::new(self.left, self.top),
                Point::new(self.right, self.top),
            ),
            FrameSide::Right => (
                Point::new(self.right, self.top),
                Point::new(self.right, self.bottom),
            ),
            FrameSide::Bottom => (
                Point::new(self.left, self.bottom),
                Point::new(self.right, self.bottom),
            ),
        }
    }

    /// Area of the frame, doubled to match exact shoelace sums.
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        2 * (self.right - self.left) * (self.bottom - self.top)
    }

    /// Inclusive containment test for unrounded points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.left as f64
            && p.x <= self.right as f64
            && p.y >= self.top as f64
            && p.y <= self.bottom as f64
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Exclusive containment test: the point touches no side.
    #[must_use]
    pub fn strictly_contains(&self, p: Point) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }

    /// Classifies a boundary point by the first side it lies on, checking
    /// left, top, right, bottom in that order. Corners resolve by that order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFramePoint` if the point is on no side.
    pub fn side_of(&self, p: Point) -> Result<FrameSide> {
        if self.contains_point(p) {
            for side in FrameSide::ALL {
                let coord = if side.is_vertical() { p.x } else { p.y };
                if coord == self.border(side) {
                    return Ok(side);
                }
            }
        }
        Err(GeometryError::InvalidFramePoint { x: p.x, y: p.y }.into())
    }

    /// Side a segment runs along, if both endpoints sit on the same border.
    #[must_use]
    pub fn segment_side(&self, p1: Point, p2: Point) -> Option<FrameSide> {
        if !self.contains_point(p1) || !self.contains_point(p2) {
            return None;
        }
        FrameSide::ALL.into_iter().find(|&side| {
            let border = self.border(side);
            if side.is_vertical() {
                p1.x == border && p2.x == border
            } else {
                p1.y == border && p2.y == border
            }
        })
    }
}
