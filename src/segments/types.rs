use crate::types::Point2d;
use serde::{Deserialize, Serialize};

/// Raw Hough-space line: perpendicular distance `rho` from the image origin
/// and the angle `theta` (radians) of that perpendicular.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    pub rho: f64,
    pub theta: f64,
}

/// Two endpoints defining a line through them.
///
/// Intersection math treats the line as infinite. Degenerate segments
/// (`p0 == p1`) are legal inputs; they never produce an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: Point2d,
    pub p1: Point2d,
}

impl LineSegment {
    pub fn new(p0: Point2d, p1: Point2d) -> Self {
        Self { p0, p1 }
    }
}
