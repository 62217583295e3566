pub mod frame;
pub mod line;
pub mod point;

pub use frame::{Frame, FrameSide};
pub use line::Line;
pub use point::Point;
