use thiserror::Error;

/// Top-level error type for the lineareas subdivision kernel.
#[derive(Debug, Error)]
pub enum LineAreasError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid frame bounds: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidFrame {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
    },

    #[error("point ({x}, {y}) does not lie on the frame")]
    InvalidFramePoint { x: i64, y: i64 },

    #[error("ray from ({x}, {y}) runs along the frame border and never crosses it")]
    DegenerateRay { x: i64, y: i64 },
}

/// Errors related to the edge graph and its faces.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("point ({x}, {y}) is not an endpoint of the edge")]
    PointNotOnEdge { x: i64, y: i64 },

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("face walk did not close after {steps} steps")]
    FaceNotClosed { steps: usize },
}

/// Errors related to subdivision operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`LineAreasError`].
pub type Result<T> = std::result::Result<T, LineAreasError>;
