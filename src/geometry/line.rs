use std::cmp::Ordering;

use crate::math::intersect_2d::{intersect, LineEquation};
use crate::math::Point2;

use super::{Frame, FrameSide, Point};

/// An unbounded line crossing the frame, with every point recorded on it.
///
/// The equation is kept in float precision. Recorded points are rounded and
/// are the vertices the line is later split at.
#[derive(Debug, Clone)]
pub struct Line {
    equation: LineEquation,
    points: Vec<Point>,
    side: Option<FrameSide>,
}

impl Line {
    /// Creates the line through two points, recording both.
    #[must_use]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        let mut line = Self {
            equation: LineEquation::through(p1, p2),
            points: Vec::new(),
            side: None,
        };
        line.add_point(Point::rounded(p1));
        line.add_point(Point::rounded(p2));
        line
    }

    /// Creates the line running along one side of the frame, seeded with
    /// that side's corners.
    #[must_use]
    pub fn frame_border(frame: &Frame, side: FrameSide) -> Self {
        let (a, b) = frame.corners(side);
        let mut line = Self::through(&a.to_point2(), &b.to_point2());
        line.side = Some(side);
        line
    }

    #[must_use]
    pub fn equation(&self) -> &LineEquation {
        &self.equation
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.equation.slope
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.equation.is_vertical()
    }

    /// Frame side this line runs along, `None` for interior lines.
    #[must_use]
    pub fn side(&self) -> Option<FrameSide> {
        self.side
    }

    /// Recorded points. Sorted only after [`Line::sort_points`].
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Records a point unless it is already present. Returns whether it was added.
    pub fn add_point(&mut self, p: Point) -> bool {
        if self.points.contains(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Whether both points are already recorded on this line.
    #[must_use]
    pub fn contains_same_points(&self, p1: Point, p2: Point) -> bool {
        self.points.contains(&p1) && self.points.contains(&p2)
    }

    /// Whether `p` lies within the span of the recorded points and the exact
    /// line passes through the cell of points that round to `p`.
    #[must_use]
    pub fn passes_near(&self, p: Point) -> bool {
        let spans = |coord: fn(&Point) -> i64| {
            let v = coord(&p);
            self.points.iter().map(coord).min().is_some_and(|lo| lo <= v)
                && self.points.iter().map(coord).max().is_some_and(|hi| v <= hi)
        };
        spans(|q| q.x) && spans(|q| q.y) && self.equation.crosses_unit_cell(&p.to_point2())
    }

    /// Unbounded intersection with another line; `None` for equal slopes.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        intersect(&self.equation, &other.equation)
    }

    /// Orders points along the line and drops duplicates.
    ///
    /// Vertical lines sort by y. Everything else sorts by x, with x-ties
    /// broken by y in the direction the line runs.
    pub fn sort_points(&mut self) {
        if self.is_vertical() {
            self.points.sort_by_key(|p| (p.y, p.x));
        } else {
            let descending = self.slope() < 0.0;
            self.points.sort_by(|a, b| {
                a.x.cmp(&b.x).then_with(|| {
                    let ord = a.y.cmp(&b.y);
                    if descending {
                        ord.reverse()
                    } else {
                        ord
                    }
                })
            });
        }
        self.points.dedup();
    }

    /// Whether the recorded points are strictly monotonic along the line's axis.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.points.windows(2).all(|w| {
            let ord = if self.is_vertical() {
                w[0].y.cmp(&w[1].y)
            } else {
                w[0].x.cmp(&w[1].x)
            };
            ord == Ordering::Less
        })
    }
}
