use std::collections::BTreeSet;

use crate::error::{GeometryError, Result};
use crate::geometry::{Frame, FrameSide, Line, Point};
use crate::math::intersect_2d::LineEquation;
use crate::math::Point2;

use super::LineDedup;

/// Frame lines are seeded first, one per side, in [`FrameSide::ALL`] order.
pub const FRAME_LINE_COUNT: usize = 4;

/// Slope/intercept tolerance for [`LineDedup::Equation`].
const EQUATION_DEDUP_TOLERANCE: f64 = 1e-6;

/// Where the ray from `origin` through `through` leaves the frame.
///
/// The ray aims at the side opposite `origin`'s side. When it would hit that
/// side's line outside the frame, it is clipped to the adjacent side it
/// actually crosses. The result is not rounded.
///
/// # Errors
///
/// Returns `GeometryError::InvalidFramePoint` if `origin` is not on the frame,
/// or `GeometryError::DegenerateRay` if the ray runs along a top/bottom border.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn target_point(frame: &Frame, origin: Point, through: Point) -> Result<Point2> {
    let side = frame.side_of(origin)?;
    let opposite = side.opposite();
    let border = |s: FrameSide| frame.border(s) as f64;
    let (left, top, right, bottom) = (
        border(FrameSide::Left),
        border(FrameSide::Top),
        border(FrameSide::Right),
        border(FrameSide::Bottom),
    );

    if origin.x == through.x {
        let y = if through.y < origin.y { top } else { bottom };
        return Ok(Point2::new(origin.x as f64, y));
    }

    let eq = LineEquation::through(&origin.to_point2(), &through.to_point2());
    let target = if side.is_vertical() {
        let x = border(opposite);
        let y = eq.y_at(x);
        if y < top {
            Point2::new(eq.x_at(top), top)
        } else if y > bottom {
            Point2::new(eq.x_at(bottom), bottom)
        } else {
            Point2::new(x, y)
        }
    } else {
        if eq.slope == 0.0 {
            return Err(GeometryError::DegenerateRay {
                x: origin.x,
                y: origin.y,
            }
            .into());
        }
        let y = border(opposite);
        let x = eq.x_at(y);
        if x < left {
            Point2::new(left, eq.y_at(left))
        } else if x > right {
            Point2::new(right, eq.y_at(right))
        } else {
            Point2::new(x, y)
        }
    };
    Ok(target)
}

/// Accumulates frame-crossing lines and every point where they meet.
#[derive(Debug)]
pub struct LineBuilder<'a> {
    frame: &'a Frame,
    dedup: LineDedup,
    lines: Vec<Line>,
}

impl<'a> LineBuilder<'a> {
    /// Creates a builder seeded with the four frame lines.
    #[must_use]
    pub fn new(frame: &'a Frame, dedup: LineDedup) -> Self {
        let lines = FrameSide::ALL
            .into_iter()
            .map(|side| Line::frame_border(frame, side))
            .collect();
        Self {
            frame,
            dedup,
            lines,
        }
    }

    /// Lines built so far, frame lines first. Points are not yet sorted.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Adds the line cast from `origin` through `through`.
    ///
    /// Returns `false` when an equivalent line already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `origin` is not on the frame or the ray is degenerate.
    pub fn add_ray(&mut self, origin: Point, through: Point) -> Result<bool> {
        let frame = self.frame;
        let target = target_point(frame, origin, through)?;
        let exit = Point::rounded(&target);
        let mut line = Line::through(&origin.to_point2(), &target);

        if self.is_duplicate(origin, exit, line.equation()) {
            tracing::debug!(%origin, %through, target = %exit, "line already present");
            return Ok(false);
        }

        line.add_point(through);
        self.record_on_border(origin);
        self.record_on_border(exit);

        let mut crossings = Vec::new();
        for other in self.lines.iter_mut().skip(FRAME_LINE_COUNT) {
            let Some(crossing) = line.intersection(other) else {
                continue;
            };
            if frame.contains(&crossing) {
                let p = Point::rounded(&crossing);
                line.add_point(p);
                other.add_point(p);
                crossings.push(p);
            }
        }
        for p in crossings {
            self.record_on_border(p);
        }

        tracing::trace!(%origin, target = %exit, points = line.points().len(), "line added");
        self.lines.push(line);
        Ok(true)
    }

    /// Snaps vertices onto passing lines, sorts every line's points along
    /// the line and returns the lines.
    #[must_use]
    pub fn finish(mut self) -> Vec<Line> {
        self.snap_vertices();
        for line in &mut self.lines {
            line.sort_points();
        }
        self.lines
    }

    /// Records `p` on the frame line of every border it lies on, so a corner
    /// lands on two of them.
    fn record_on_border(&mut self, p: Point) {
        if !self.frame.contains_point(p) {
            return;
        }
        for side in FrameSide::ALL {
            let coord = if side.is_vertical() { p.x } else { p.y };
            if coord == self.frame.border(side) {
                self.lines[side.index()].add_point(p);
            }
        }
    }

    /// Routes every line through each recorded vertex whose rounding cell it
    /// crosses. Rounding can move a crossing onto another line's path; without
    /// this the two would overlap or cross between vertices.
    fn snap_vertices(&mut self) {
        let vertices: BTreeSet<Point> = self
            .lines
            .iter()
            .flat_map(|l| l.points().iter().copied())
            .collect();
        let mut snapped = 0usize;
        for line in &mut self.lines {
            for &v in &vertices {
                if line.passes_near(v) && line.add_point(v) {
                    snapped += 1;
                }
            }
        }
        if snapped > 0 {
            tracing::debug!(snapped, "vertices snapped onto passing lines");
        }
    }

    fn is_duplicate(&self, origin: Point, target: Point, equation: &LineEquation) -> bool {
        if self
            .lines
            .iter()
            .any(|l| l.contains_same_points(origin, target))
        {
            return true;
        }
        match self.dedup {
            LineDedup::Endpoints => false,
            LineDedup::Equation => self
                .lines
                .iter()
                .skip(FRAME_LINE_COUNT)
                .any(|l| l.equation().approx_eq(equation, EQUATION_DEDUP_TOLERANCE)),
        }
    }
}

/// Builds every line from each outer point through each inner point,
/// outer-major, with all crossings recorded and points sorted.
///
/// # Errors
///
/// Returns an error if an outer point is not on the frame.
pub fn build_lines(
    frame: &Frame,
    outer_points: &[Point],
    inner_points: &[Point],
    dedup: LineDedup,
) -> Result<Vec<Line>> {
    let mut builder = LineBuilder::new(frame, dedup);
    for &origin in outer_points {
        for &through in inner_points {
            builder.add_ray(origin, through)?;
        }
    }
    let lines = builder.finish();
    tracing::debug!(lines = lines.len(), "lines built");
    Ok(lines)
}
