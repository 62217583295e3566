pub mod subdivision;

pub use subdivision::Subdivision2D;
