use super::{Point2, VERTICAL_SLOPE};

/// Slope of the line through `p1` and `p2` in `y = mx + b` form.
///
/// Returns [`VERTICAL_SLOPE`] when both points share an x-coordinate. The
/// sentinel is a constant, so two vertical lines always compare equal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn steepness(p1: &Point2, p2: &Point2) -> f64 {
    if p1.x == p2.x {
        return VERTICAL_SLOPE;
    }
    (p1.y - p2.y) / (p1.x - p2.x)
}

/// Y-intercept of the line through `p1` and `p2`.
///
/// Vertical lines have no intercept; `0.0` is returned and never read.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn bias(p1: &Point2, p2: &Point2) -> f64 {
    if p1.x == p2.x {
        return 0.0;
    }
    (p1.y * p2.x - p2.y * p1.x) / (p2.x - p1.x)
}

/// Slope-intercept equation of an unbounded line.
///
/// `anchor_x` is the x-coordinate of the first defining point. It only
/// matters for vertical lines, which bypass `y = mx + b` entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub slope: f64,
    pub bias: f64,
    pub anchor_x: f64,
}

impl LineEquation {
    /// Builds the equation of the line through two points.
    #[must_use]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        Self {
            slope: steepness(p1, p2),
            bias: bias(p1, p2),
            anchor_x: p1.x,
        }
    }

    /// Returns `true` for the vertical sentinel slope.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.slope == VERTICAL_SLOPE
    }

    /// Evaluates `y = mx + b`. Meaningless for vertical lines.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.bias
    }

    /// Solves `y = mx + b` for `x`. Meaningless for horizontal and vertical lines.
    #[must_use]
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.bias) / self.slope
    }

    /// Loose equality used for geometric line dedup.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => (self.anchor_x - other.anchor_x).abs() <= tolerance,
            (false, false) => {
                (self.slope - other.slope).abs() <= tolerance
                    && (self.bias - other.bias).abs() <= tolerance
            }
            _ => false,
        }
    }

    /// Whether the line passes through the unit cell centred on `centre`.
    ///
    /// The cell is half-open, `[c - 0.5, c + 0.5)` on each axis, matching the
    /// points that round to `centre`.
    #[must_use]
    pub fn crosses_unit_cell(&self, centre: &Point2) -> bool {
        if self.is_vertical() {
            return centre.x - 0.5 <= self.anchor_x && self.anchor_x < centre.x + 0.5;
        }
        let y0 = self.y_at(centre.x - 0.5);
        let y1 = self.y_at(centre.x + 0.5);
        y0.min(y1) < centre.y + 0.5 && y0.max(y1) >= centre.y - 0.5
    }
}

/// Intersection of two unbounded lines.
///
/// Returns `None` when both slopes are exactly equal, including two vertical
/// lines. Parallel lines are routine here, so this is not an error.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn intersect(a: &LineEquation, b: &LineEquation) -> Option<Point2> {
    if a.slope == b.slope {
        return None;
    }
    if a.is_vertical() {
        return Some(Point2::new(a.anchor_x, b.y_at(a.anchor_x)));
    }
    if b.is_vertical() {
        return Some(Point2::new(b.anchor_x, a.y_at(b.anchor_x)));
    }
    let x = -(a.bias - b.bias) / (a.slope - b.slope);
    Some(Point2::new(x, a.y_at(x)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eq(x1: f64, y1: f64, x2: f64, y2: f64) -> LineEquation {
        LineEquation::through(&Point2::new(x1, y1), &Point2::new(x2, y2))
    }

    #[test]
    fn steepness_and_bias_of_sloped_line() {
        let p1 = Point2::new(250.0, 250.0);
        let p2 = Point2::new(400.0, 500.0);
        assert_relative_eq!(steepness(&p1, &p2), 5.0 / 3.0);
        assert_relative_eq!(bias(&p1, &p2), 250.0 - 5.0 / 3.0 * 250.0, epsilon = 1e-9);
    }

    #[test]
    fn vertical_sentinel_is_stable() {
        let a = steepness(&Point2::new(3.0, 0.0), &Point2::new(3.0, 9.0));
        let b = steepness(&Point2::new(7.0, 4.0), &Point2::new(7.0, -2.0));
        assert!(a.is_infinite() && a < 0.0);
        assert!(a == b);
        assert!(bias(&Point2::new(3.0, 0.0), &Point2::new(3.0, 9.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn intersection_satisfies_both_lines() {
        let a = eq(250.0, 250.0, 550.0, 750.0);
        let b = eq(250.0, 750.0, 550.0, 250.0);
        let p = intersect(&a, &b).unwrap();
        assert_relative_eq!(p.y, a.y_at(p.x), epsilon = 1e-9);
        assert_relative_eq!(p.y, b.y_at(p.x), epsilon = 1e-9);
        assert_relative_eq!(p.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = eq(0.0, 0.0, 10.0, 10.0);
        let b = eq(0.0, 5.0, 10.0, 15.0);
        assert!(intersect(&a, &b).is_none());
    }

    #[test]
    fn two_verticals_do_not_intersect() {
        let a = eq(1.0, 0.0, 1.0, 10.0);
        let b = eq(4.0, 0.0, 4.0, 10.0);
        assert!(intersect(&a, &b).is_none());
    }

    #[test]
    fn vertical_against_sloped_line() {
        let v = eq(500.0, 250.0, 500.0, 750.0);
        let s = eq(250.0, 250.0, 750.0, 750.0);
        let p = intersect(&v, &s).unwrap();
        assert_relative_eq!(p.x, 500.0);
        assert_relative_eq!(p.y, 500.0, epsilon = 1e-9);
        let q = intersect(&s, &v).unwrap();
        assert_relative_eq!(q.x, p.x);
        assert_relative_eq!(q.y, p.y);
    }

    #[test]
    fn approx_eq_distinguishes_verticals_by_x() {
        let a = eq(1.0, 0.0, 1.0, 10.0);
        let b = eq(1.0, 3.0, 1.0, 7.0);
        let c = eq(2.0, 3.0, 2.0, 7.0);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&c, 1e-6));
        assert!(!a.approx_eq(&eq(0.0, 0.0, 10.0, 10.0), 1e-6));
    }

    #[test]
    fn unit_cell_crossing() {
        let shallow = eq(378.0, 251.0, 675.0, 250.0);
        assert!(shallow.crosses_unit_cell(&Point2::new(673.0, 250.0)));
        assert!(!shallow.crosses_unit_cell(&Point2::new(673.0, 251.0)));
        assert!(!shallow.crosses_unit_cell(&Point2::new(400.0, 250.0)));

        let border = eq(250.0, 250.0, 750.0, 250.0);
        assert!(border.crosses_unit_cell(&Point2::new(691.0, 250.0)));
        assert!(!border.crosses_unit_cell(&Point2::new(691.0, 251.0)));

        let v = eq(4.0, 0.0, 4.0, 10.0);
        assert!(v.crosses_unit_cell(&Point2::new(4.0, 3.0)));
        assert!(!v.crosses_unit_cell(&Point2::new(5.0, 3.0)));
    }
}
