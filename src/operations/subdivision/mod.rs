mod catalog;
mod lines;
mod trace;

pub use catalog::enumerate_faces;
pub use lines::{build_lines, target_point, LineBuilder, FRAME_LINE_COUNT};
pub use trace::{trace_face, TraceOutcome};

use crate::error::{OperationError, Result};
use crate::geometry::{Frame, Line, Point};
use crate::topology::{EdgeGraph, Face};

/// How the line builder decides a new ray repeats an existing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDedup {
    /// Skip a ray when some line already holds both its origin and its
    /// rounded exit point.
    #[default]
    Endpoints,
    /// Also skip a ray whose slope and intercept match an existing line,
    /// which catches rays whose exit points rounded apart.
    Equation,
}

/// Tuning knobs for [`Subdivision2D`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SubdivisionOptions {
    pub line_dedup: LineDedup,
}

/// Everything a renderer needs: the lines, their edges and the faces.
#[derive(Debug)]
pub struct Arrangement {
    pub frame: Frame,
    /// Frame lines first (left, top, right, bottom), then one line per ray.
    pub lines: Vec<Line>,
    pub graph: EdgeGraph,
    /// Bounded faces in discovery order.
    pub faces: Vec<Face>,
}

impl Arrangement {
    /// The four frame lines.
    #[must_use]
    pub fn frame_lines(&self) -> &[Line] {
        &self.lines[..FRAME_LINE_COUNT]
    }

    /// The lines cast from outer points.
    #[must_use]
    pub fn ray_lines(&self) -> &[Line] {
        &self.lines[FRAME_LINE_COUNT..]
    }

    /// Vertex polygon of every face, ready to fill.
    #[must_use]
    pub fn face_polygons(&self) -> Vec<Vec<Point>> {
        self.faces.iter().map(Face::polygon).collect()
    }
}

/// Subdivides a frame by rays cast from boundary points through interior
/// points and enumerates the enclosed areas.
///
/// Every outer point casts one ray through every inner point, across to the
/// far side of the frame.
#[derive(Debug)]
pub struct Subdivision2D {
    frame: Frame,
    outer_points: Vec<Point>,
    inner_points: Vec<Point>,
    options: SubdivisionOptions,
}

impl Subdivision2D {
    /// Creates a new subdivision operation.
    #[must_use]
    pub fn new(frame: Frame, outer_points: Vec<Point>, inner_points: Vec<Point>) -> Self {
        Self {
            frame,
            outer_points,
            inner_points,
            options: SubdivisionOptions::default(),
        }
    }

    /// Replaces the default options.
    #[must_use]
    pub fn with_options(mut self, options: SubdivisionOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the subdivision.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFramePoint` if an outer point is off the
    /// frame, `OperationError::InvalidInput` if an inner point is not strictly
    /// inside it, or a topology error if the resulting graph is inconsistent.
    pub fn execute(&self) -> Result<Arrangement> {
        for &p in &self.outer_points {
            self.frame.side_of(p)?;
        }
        if let Some(p) = self
            .inner_points
            .iter()
            .find(|&&p| !self.frame.strictly_contains(p))
        {
            return Err(OperationError::InvalidInput(format!(
                "inner point {p} is not strictly inside the frame"
            ))
            .into());
        }

        // Step 1: Cast rays and record every crossing.
        let lines = build_lines(
            &self.frame,
            &self.outer_points,
            &self.inner_points,
            self.options.line_dedup,
        )?;

        // Step 2: Split lines into edges.
        let graph = EdgeGraph::from_lines(&lines, &self.frame)?;

        // Step 3: Walk every face.
        let faces = enumerate_faces(&graph)?;

        tracing::debug!(
            lines = lines.len(),
            edges = graph.len(),
            faces = faces.len(),
            "subdivision complete"
        );
        Ok(Arrangement {
            frame: self.frame,
            lines,
            graph,
            faces,
        })
    }
}
