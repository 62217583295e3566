use crate::error::TopologyError;
use crate::geometry::{Frame, FrameSide, Point};
use crate::math::angle_2d::vector_angle;

use super::face::Rotation;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the edge graph.
    pub struct EdgeId;
}

/// Which side of an edge a face walk uses, relative to the walk's rotation.
///
/// An edge arriving at a vertex is `Cp` when walked clockwise with a positive
/// arrival angle or counter-clockwise with a non-positive one, and `Acp`
/// otherwise. Arriving at the other endpoint with the opposite rotation yields
/// the same class, so the class names one side of the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Cp,
    Acp,
}

/// A straight segment between two adjacent points on a line.
///
/// `p1` and `p2` are unordered; both names exist only so a walk can tell the
/// endpoints apart.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub p1: Point,
    pub p2: Point,
    /// Slope of the line the edge was split from.
    pub slope: f64,
    /// Frame side the edge runs along, `None` for interior edges.
    pub side: Option<FrameSide>,
}

impl EdgeData {
    /// Creates an edge and classifies it against the frame.
    #[must_use]
    pub fn new(p1: Point, p2: Point, slope: f64, frame: &Frame) -> Self {
        Self {
            p1,
            p2,
            slope,
            side: frame.segment_side(p1, p2),
        }
    }

    /// Whether `p` is one of the two endpoints.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p == self.p1 || p == self.p2
    }

    /// Returns the endpoint opposite `p`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `p` is not an endpoint.
    pub fn other_point(&self, p: Point) -> Result<Point, TopologyError> {
        if p == self.p1 {
            Ok(self.p2)
        } else if p == self.p2 {
            Ok(self.p1)
        } else {
            Err(TopologyError::PointNotOnEdge { x: p.x, y: p.y })
        }
    }

    /// Angle of the vector from the other endpoint into `p`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `p` is not an endpoint.
    pub fn arrival_angle(&self, p: Point) -> Result<f64, TopologyError> {
        let other = self.other_point(p)?;
        Ok(vector_angle(&other.to_point2(), &p.to_point2()))
    }

    /// Angle of the vector leaving `p` along this edge.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `p` is not an endpoint.
    pub fn departure_angle(&self, p: Point) -> Result<f64, TopologyError> {
        let other = self.other_point(p)?;
        Ok(vector_angle(&p.to_point2(), &other.to_point2()))
    }

    /// Whether a walk along this edge toward `target` may use `rotation`.
    ///
    /// Interior edges allow both rotations. A frame edge only has the frame's
    /// interior on one side: clockwise walks go up the left side, right along
    /// the top, down the right side and left along the bottom.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `target` is not an endpoint.
    pub fn is_viable_direction(
        &self,
        target: Point,
        rotation: Rotation,
    ) -> Result<bool, TopologyError> {
        let Some(side) = self.side else {
            return Ok(true);
        };
        let angle = self.arrival_angle(target)?;
        let clockwise = match side {
            FrameSide::Left | FrameSide::Top => angle <= 0.0,
            FrameSide::Right | FrameSide::Bottom => angle > 0.0,
        };
        Ok(clockwise == (rotation == Rotation::Clockwise))
    }

    /// Orientation class of this edge arriving at `p` under `rotation`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `p` is not an endpoint.
    pub fn orientation(&self, p: Point, rotation: Rotation) -> Result<Orientation, TopologyError> {
        let angle = self.arrival_angle(p)?;
        let cp = match rotation {
            Rotation::Clockwise => angle > 0.0,
            Rotation::CounterClockwise => angle <= 0.0,
        };
        Ok(if cp { Orientation::Cp } else { Orientation::Acp })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::VERTICAL_SLOPE;

    fn frame() -> Frame {
        Frame::new(250, 250, 750, 750).unwrap()
    }

    fn left_edge() -> EdgeData {
        EdgeData::new(Point::new(250, 250), Point::new(250, 750), VERTICAL_SLOPE, &frame())
    }

    #[test]
    fn vertical_frame_edge_is_left_side() {
        let e = left_edge();
        assert_eq!(e.side, Some(FrameSide::Left));
        assert_eq!(e.side.unwrap().index(), 0);
    }

    #[test]
    fn other_point_rejects_foreign_points() {
        let e = left_edge();
        assert_eq!(e.other_point(Point::new(250, 250)).unwrap(), Point::new(250, 750));
        assert_eq!(e.other_point(Point::new(250, 750)).unwrap(), Point::new(250, 250));
        for p in [Point::new(250, 500), Point::new(400, 500), Point::new(750, 750)] {
            assert!(matches!(
                e.other_point(p),
                Err(TopologyError::PointNotOnEdge { .. })
            ));
        }
    }

    #[test]
    fn interior_edges_have_no_side() {
        let e = EdgeData::new(Point::new(400, 500), Point::new(460, 600), 5.0 / 3.0, &frame());
        assert!(e.side.is_none());
        assert!(e.is_viable_direction(Point::new(400, 500), Rotation::Clockwise).unwrap());
        assert!(e
            .is_viable_direction(Point::new(400, 500), Rotation::CounterClockwise)
            .unwrap());
    }

    #[test]
    fn frame_edges_allow_one_rotation() {
        let e = left_edge();
        // Walking up the left side keeps the frame on the right: clockwise.
        let up = Point::new(250, 250);
        assert!(e.is_viable_direction(up, Rotation::Clockwise).unwrap());
        assert!(!e.is_viable_direction(up, Rotation::CounterClockwise).unwrap());
        let down = Point::new(250, 750);
        assert!(!e.is_viable_direction(down, Rotation::Clockwise).unwrap());
        assert!(e.is_viable_direction(down, Rotation::CounterClockwise).unwrap());

        let bottom = EdgeData::new(Point::new(250, 750), Point::new(750, 750), 0.0, &frame());
        assert!(bottom
            .is_viable_direction(Point::new(250, 750), Rotation::Clockwise)
            .unwrap());
        assert!(bottom
            .is_viable_direction(Point::new(750, 750), Rotation::CounterClockwise)
            .unwrap());
    }

    #[test]
    fn orientation_names_one_side_of_the_edge() {
        let e = EdgeData::new(Point::new(400, 500), Point::new(460, 600), 5.0 / 3.0, &frame());
        let a = e.orientation(Point::new(460, 600), Rotation::Clockwise).unwrap();
        let b = e
            .orientation(Point::new(400, 500), Rotation::CounterClockwise)
            .unwrap();
        let c = e
            .orientation(Point::new(460, 600), Rotation::CounterClockwise)
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn orientation_is_consistent_for_horizontal_edges() {
        let e = EdgeData::new(Point::new(300, 500), Point::new(600, 500), 0.0, &frame());
        let right = e.orientation(Point::new(600, 500), Rotation::Clockwise).unwrap();
        let left = e
            .orientation(Point::new(300, 500), Rotation::CounterClockwise)
            .unwrap();
        assert_eq!(right, left);
    }
}
