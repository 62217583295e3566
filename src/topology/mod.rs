pub mod edge;
pub mod face;

pub use edge::{EdgeData, EdgeId, Orientation};
pub use face::{Face, FaceStep, Rotation};

use std::collections::BTreeMap;

use crate::error::TopologyError;
use crate::geometry::{Frame, Line, Point};
use slotmap::SlotMap;

/// Arena of edges plus the rotation system around every vertex.
///
/// Edges reference vertices by their integer [`Point`]; faces reference edges
/// by [`EdgeId`]. Each vertex keeps its incident edges sorted by departure
/// angle, with ties broken by `EdgeId`, so a walk can step to the angular
/// neighbour of the edge it came in on without comparing angles again.
#[derive(Debug, Default)]
pub struct EdgeGraph {
    edges: SlotMap<EdgeId, EdgeData>,
    rotations: BTreeMap<Point, Vec<EdgeId>>,
}

impl EdgeGraph {
    /// Creates a new, empty edge graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits every line into edges between consecutive recorded points.
    ///
    /// Lines must already be sorted. Edges are created in line order, so a
    /// line with `k` points contributes `k - 1` edges, less any segment
    /// another line already produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotation system cannot be built, which means
    /// an edge was registered at a vertex it does not touch.
    pub fn from_lines(lines: &[Line], frame: &Frame) -> Result<Self, TopologyError> {
        let mut graph = Self::new();
        for line in lines {
            for pair in line.points().windows(2) {
                graph.add_edge(EdgeData::new(pair[0], pair[1], line.slope(), frame));
            }
        }
        graph.sort_rotations()?;
        tracing::debug!(
            edges = graph.len(),
            vertices = graph.rotations.len(),
            "edge graph built"
        );
        Ok(graph)
    }

    /// Inserts an edge unless one with the same endpoints exists.
    ///
    /// Returns the new edge's ID, or `None` for a duplicate. The rotation
    /// system is stale until [`EdgeGraph::sort_rotations`] runs.
    pub fn add_edge(&mut self, data: EdgeData) -> Option<EdgeId> {
        if data.p1 == data.p2 || self.find_edge(data.p1, data.p2).is_some() {
            tracing::trace!(p1 = %data.p1, p2 = %data.p2, "skipping duplicate edge");
            return None;
        }
        let (p1, p2) = (data.p1, data.p2);
        let id = self.edges.insert(data);
        self.rotations.entry(p1).or_default().push(id);
        self.rotations.entry(p2).or_default().push(id);
        Some(id)
    }

    /// Sorts every vertex's incident edges by departure angle.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if an edge is registered at a
    /// vertex that is not one of its endpoints.
    pub fn sort_rotations(&mut self) -> Result<(), TopologyError> {
        let Self { edges, rotations } = self;
        for (&vertex, ring) in rotations.iter_mut() {
            let mut keyed = Vec::with_capacity(ring.len());
            for &id in ring.iter() {
                let edge = edges
                    .get(id)
                    .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))?;
                keyed.push((edge.departure_angle(vertex)?, id));
            }
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
            *ring = keyed.into_iter().map(|(_, id)| id).collect();
        }
        Ok(())
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// The first inserted edge, if any.
    #[must_use]
    pub fn first_edge(&self) -> Option<EdgeId> {
        self.edges.keys().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All vertices, in point order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.rotations.keys().copied()
    }

    /// Edges incident to `vertex`, sorted by departure angle.
    #[must_use]
    pub fn incident(&self, vertex: Point) -> &[EdgeId] {
        self.rotations.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// The edge joining `p` and `q`, if any.
    #[must_use]
    pub fn find_edge(&self, p: Point, q: Point) -> Option<EdgeId> {
        self.incident(p).iter().copied().find(|&id| {
            self.edges
                .get(id)
                .is_some_and(|e| e.contains(q) && e.contains(p))
        })
    }

    /// The edge after `from` in the rotation around `vertex`.
    ///
    /// Clockwise takes the previous edge in increasing-angle order,
    /// counter-clockwise the next one, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PointNotOnEdge` if `from` does not touch `vertex`.
    pub fn next_around(
        &self,
        vertex: Point,
        from: EdgeId,
        rotation: Rotation,
    ) -> Result<EdgeId, TopologyError> {
        let ring = self.incident(vertex);
        let pos = ring
            .iter()
            .position(|&id| id == from)
            .ok_or(TopologyError::PointNotOnEdge {
                x: vertex.x,
                y: vertex.y,
            })?;
        let n = ring.len();
        let next = match rotation {
            Rotation::Clockwise => (pos + n - 1) % n,
            Rotation::CounterClockwise => (pos + 1) % n,
        };
        Ok(ring[next])
    }
}
