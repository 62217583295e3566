use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::geometry::Point;
use crate::topology::{EdgeGraph, EdgeId, Face, Orientation, Rotation};

use super::trace::{trace_face, TraceOutcome};

/// Edge sides already used as a face boundary, split by orientation class.
#[derive(Debug, Default)]
struct VisitedSides {
    cp: HashSet<EdgeId>,
    acp: HashSet<EdgeId>,
}

impl VisitedSides {
    fn set(&self, orientation: Orientation) -> &HashSet<EdgeId> {
        match orientation {
            Orientation::Cp => &self.cp,
            Orientation::Acp => &self.acp,
        }
    }

    fn contains(&self, edge: EdgeId, orientation: Orientation) -> bool {
        self.set(orientation).contains(&edge)
    }

    fn insert(&mut self, edge: EdgeId, orientation: Orientation) {
        match orientation {
            Orientation::Cp => self.cp.insert(edge),
            Orientation::Acp => self.acp.insert(edge),
        };
    }
}

/// A pending walk: leave `edge` toward `point` turning with `rotation`.
#[derive(Debug, Clone, Copy)]
struct WorkItem {
    edge: EdgeId,
    point: Point,
    rotation: Rotation,
}

/// Discovers every bounded face of the graph.
///
/// Starts from the first edge, walking toward its `p2` with whichever
/// rotation keeps the frame interior on the walk's inner side. Each traced
/// face queues its boundary edges with the flipped rotation, which walks the
/// face on their other side. The queue is FIFO, so the discovery order only
/// depends on the input.
///
/// # Errors
///
/// Returns an error if the graph is inconsistent: a walk leaves an edge
/// through a point it does not contain, or never closes.
pub fn enumerate_faces(graph: &EdgeGraph) -> Result<Vec<Face>> {
    let Some(seed) = graph.first_edge() else {
        return Ok(Vec::new());
    };
    let seed_edge = graph.edge(seed)?;
    let seed_point = seed_edge.p2;
    let rotation = if seed_edge.is_viable_direction(seed_point, Rotation::Clockwise)? {
        Rotation::Clockwise
    } else {
        Rotation::CounterClockwise
    };

    let mut queue = VecDeque::from([WorkItem {
        edge: seed,
        point: seed_point,
        rotation,
    }]);
    let mut visited = VisitedSides::default();
    let mut faces = Vec::new();

    while let Some(item) = queue.pop_front() {
        let orientation = graph
            .edge(item.edge)?
            .orientation(item.point, item.rotation)?;
        if visited.contains(item.edge, orientation) {
            continue;
        }

        let face = match trace_face(graph, item.edge, item.point, item.rotation)? {
            TraceOutcome::Closed(face) => face,
            TraceOutcome::NonViableDirection => {
                tracing::trace!(point = %item.point, "skipping outer side of frame edge");
                continue;
            }
        };

        for step in face.steps() {
            let orientation = graph
                .edge(step.edge)?
                .orientation(step.point, item.rotation)?;
            visited.insert(step.edge, orientation);
            if step.edge != item.edge {
                queue.push_back(WorkItem {
                    edge: step.edge,
                    point: step.point,
                    rotation: item.rotation.flipped(),
                });
            }
        }

        tracing::debug!(
            index = faces.len(),
            vertices = face.len(),
            rotation = ?item.rotation,
            "face traced"
        );
        faces.push(face);
    }

    Ok(faces)
}
