use crate::error::TopologyError;
use crate::geometry::Point;
use crate::math::polygon_2d::{doubled_signed_area, rotate_to_canonical_start};

use super::edge::EdgeId;
use super::EdgeGraph;

/// Turning sense of a face walk, as seen on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// One step of a face walk: the edge taken and the point it arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStep {
    pub edge: EdgeId,
    pub point: Point,
}

/// A closed region bounded by edges, as an ordered cycle of steps.
///
/// The first step leaves the face's start vertex; the last step arrives back
/// at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    steps: Vec<FaceStep>,
    rotation: Rotation,
}

impl Face {
    /// Creates a face from walk steps.
    #[must_use]
    pub fn new(steps: Vec<FaceStep>, rotation: Rotation) -> Self {
        Self { steps, rotation }
    }

    #[must_use]
    pub fn steps(&self) -> &[FaceStep] {
        &self.steps
    }

    /// Rotation the face was traced with.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Vertex polygon in walk order, ending at the start vertex.
    #[must_use]
    pub fn polygon(&self) -> Vec<Point> {
        self.steps.iter().map(|s| s.point).collect()
    }

    /// Vertex polygon rotated to start at its smallest vertex.
    #[must_use]
    pub fn canonical_polygon(&self) -> Vec<Point> {
        rotate_to_canonical_start(&self.polygon())
    }

    /// Exact twice-signed area. Positive for clockwise faces.
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        doubled_signed_area(&self.polygon())
    }

    /// Checks that consecutive steps share their endpoint and that the last
    /// step arrives where the first one left.
    ///
    /// # Errors
    ///
    /// Returns an error if a step references an edge missing from `graph`.
    pub fn is_closed(&self, graph: &EdgeGraph) -> Result<bool, TopologyError> {
        let Some(first) = self.steps.first() else {
            return Ok(false);
        };
        let mut departure = graph.edge(first.edge)?.other_point(first.point)?;
        for step in &self.steps {
            let edge = graph.edge(step.edge)?;
            if !edge.contains(departure) || edge.other_point(departure)? != step.point {
                return Ok(false);
            }
            departure = step.point;
        }
        Ok(graph.edge(first.edge)?.other_point(first.point)? == departure)
    }
}
