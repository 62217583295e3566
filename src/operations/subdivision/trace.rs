use crate::error::{Result, TopologyError};
use crate::geometry::Point;
use crate::topology::{EdgeGraph, EdgeId, Face, FaceStep, Rotation};

/// Result of a single face walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The walk returned to its start vertex.
    Closed(Face),
    /// The start edge is a frame edge whose inner side lies the other way.
    /// Callers retry with the opposite rotation or drop the attempt.
    NonViableDirection,
}

/// Traces the face next to `start_edge`, leaving it toward `target`.
///
/// At every arrival vertex the walk takes the angular neighbour of the edge
/// it came in on, in the sense given by `rotation`, until it is back at the
/// start edge's other endpoint. Clockwise faces lie to the right of the walk
/// on a y-down canvas, counter-clockwise faces to the left.
///
/// # Errors
///
/// Returns `TopologyError::PointNotOnEdge` if `target` is not an endpoint of
/// `start_edge`, or `TopologyError::FaceNotClosed` if the walk never returns,
/// which means the graph is inconsistent.
pub fn trace_face(
    graph: &EdgeGraph,
    start_edge: EdgeId,
    target: Point,
    rotation: Rotation,
) -> Result<TraceOutcome> {
    let start = graph.edge(start_edge)?;
    if !start.is_viable_direction(target, rotation)? {
        tracing::trace!(%target, ?rotation, "rotation not viable on frame edge");
        return Ok(TraceOutcome::NonViableDirection);
    }
    let start_point = start.other_point(target)?;

    let max_steps = 2 * graph.len() + 1;
    let mut steps = vec![FaceStep {
        edge: start_edge,
        point: target,
    }];
    let mut last_edge = start_edge;
    let mut last_point = target;

    while last_point != start_point {
        if steps.len() > max_steps {
            return Err(TopologyError::FaceNotClosed { steps: steps.len() }.into());
        }
        let next = graph.next_around(last_point, last_edge, rotation)?;
        last_point = graph.edge(next)?.other_point(last_point)?;
        last_edge = next;
        tracing::trace!(point = %last_point, "face step");
        steps.push(FaceStep {
            edge: next,
            point: last_point,
        });
    }

    Ok(TraceOutcome::Closed(Face::new(steps, rotation)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LineAreasError;
    use crate::geometry::{Frame, FrameSide, Line};
    use crate::math::Point2;

    /// A 10x10 frame split by its top-left to bottom-right diagonal.
    fn split_square() -> EdgeGraph {
        let frame = Frame::new(0, 0, 10, 10).unwrap();
        let mut lines: Vec<Line> = FrameSide::ALL
            .into_iter()
            .map(|side| Line::frame_border(&frame, side))
            .collect();
        lines.push(Line::through(&Point2::new(0.0, 0.0), &Point2::new(10.0, 10.0)));
        EdgeGraph::from_lines(&lines, &frame).unwrap()
    }

    fn left_side(graph: &EdgeGraph) -> EdgeId {
        graph.find_edge(Point::new(0, 0), Point::new(0, 10)).unwrap()
    }

    #[test]
    fn counter_clockwise_down_the_left_side() {
        let graph = split_square();
        let start = left_side(&graph);
        let TraceOutcome::Closed(face) =
            trace_face(&graph, start, Point::new(0, 10), Rotation::CounterClockwise).unwrap()
        else {
            panic!("expected a closed face");
        };
        assert_eq!(
            face.polygon(),
            vec![Point::new(0, 10), Point::new(10, 10), Point::new(0, 0)]
        );
        assert_eq!(face.rotation(), Rotation::CounterClockwise);
        assert_eq!(face.doubled_area(), -100);
        assert!(face.is_closed(&graph).unwrap());
    }

    #[test]
    fn clockwise_up_the_left_side_finds_the_same_region() {
        let graph = split_square();
        let start = left_side(&graph);
        let TraceOutcome::Closed(face) =
            trace_face(&graph, start, Point::new(0, 0), Rotation::Clockwise).unwrap()
        else {
            panic!("expected a closed face");
        };
        assert_eq!(
            face.polygon(),
            vec![Point::new(0, 0), Point::new(10, 10), Point::new(0, 10)]
        );
        assert_eq!(face.doubled_area(), 100);
        assert!(face.is_closed(&graph).unwrap());
    }

    #[test]
    fn outward_rotation_on_frame_edge_is_not_viable() {
        let graph = split_square();
        let start = left_side(&graph);
        assert_eq!(
            trace_face(&graph, start, Point::new(0, 10), Rotation::Clockwise).unwrap(),
            TraceOutcome::NonViableDirection
        );
        assert_eq!(
            trace_face(&graph, start, Point::new(0, 0), Rotation::CounterClockwise).unwrap(),
            TraceOutcome::NonViableDirection
        );
    }

    #[test]
    fn interior_edge_traces_both_sides() {
        let graph = split_square();
        let diagonal = graph
            .find_edge(Point::new(0, 0), Point::new(10, 10))
            .unwrap();
        let mut areas = Vec::new();
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let TraceOutcome::Closed(face) =
                trace_face(&graph, diagonal, Point::new(10, 10), rotation).unwrap()
            else {
                panic!("interior edges allow both rotations");
            };
            assert_eq!(face.len(), 3);
            areas.push(face.doubled_area());
        }
        assert_eq!(areas, vec![100, -100]);
    }

    #[test]
    fn target_must_be_an_endpoint() {
        let graph = split_square();
        let diagonal = graph
            .find_edge(Point::new(0, 0), Point::new(10, 10))
            .unwrap();
        assert!(matches!(
            trace_face(&graph, diagonal, Point::new(5, 5), Rotation::Clockwise),
            Err(LineAreasError::Topology(TopologyError::PointNotOnEdge { .. }))
        ));
    }
}
