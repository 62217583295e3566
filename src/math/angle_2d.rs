use std::f64::consts::PI;

use super::{Point2, Vector2};

/// Phase of a vector in `(-PI, PI]`.
///
/// Coordinates are canvas-style (y grows downward), so vectors pointing
/// visually upward get negative angles.
#[must_use]
pub fn phase(v: &Vector2) -> f64 {
    let angle = v.y.atan2(v.x);
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

/// Phase of the vector pointing from `from` to `to`.
#[must_use]
pub fn vector_angle(from: &Point2, to: &Point2) -> f64 {
    phase(&(to - from))
}
