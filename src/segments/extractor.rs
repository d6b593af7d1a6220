use super::{LineSegment, PolarLine};
use crate::types::Point2d;

/// Default half-extent, in pixels, of segments reconstructed from polar
/// lines. Large enough that any intersection within a realistic image
/// coordinate range behaves as if the lines were infinite.
pub const DEFAULT_LINE_EXTENT: f64 = 10_000.0;

/// Converts a polar line into a finite segment spanning `±extent` along the
/// line direction.
///
/// The closest-approach point to the origin is `(ρ cos θ, ρ sin θ)`; the
/// endpoints offset it along the direction perpendicular to `(cos θ, sin θ)`,
/// i.e. along `(-sin θ, cos θ)`.
pub fn extend_polar_line(line: &PolarLine, extent: f64) -> LineSegment {
    let (sin_t, cos_t) = line.theta.sin_cos();
    let x0 = cos_t * line.rho;
    let y0 = sin_t * line.rho;
    LineSegment::new(
        Point2d::new(x0 - extent * sin_t, y0 + extent * cos_t),
        Point2d::new(x0 + extent * sin_t, y0 - extent * cos_t),
    )
}

/// Converts polar lines into segments, one per input, order-preserving.
pub fn extend_polar_lines(lines: &[PolarLine], extent: f64) -> Vec<LineSegment> {
    lines
        .iter()
        .map(|line| extend_polar_line(line, extent))
        .collect()
}
