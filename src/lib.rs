pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{LineAreasError, Result};
pub use geometry::{Frame, FrameSide, Line, Point};
pub use operations::subdivision::{Arrangement, LineDedup, Subdivision2D, SubdivisionOptions};
pub use topology::{EdgeGraph, EdgeId, Face, Rotation};
