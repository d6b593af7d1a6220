//! Pairwise line-line intersection over sampled segments.
//!
//! Each intersection point is a noisy vote for the vanishing point. Points
//! are emitted unconditionally: an intersection far outside the image frame
//! is still a legitimate candidate, so no bounds check happens here.

use crate::segments::LineSegment;
use crate::types::Point2d;
use serde::{Deserialize, Serialize};

/// How candidate pairs are formed from the sampled segment list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Every unordered pair of distinct segments, visited once.
    #[default]
    DistinctPairs,
    /// Index-window pairing kept for compatibility with the original tool:
    /// each segment is intersected against every segment at index >= 1 that
    /// does not compare equal to it, so most pairs are visited twice.
    DropFirst,
}

/// Intersection of the infinite lines through two segments.
///
/// Returns `None` when the determinant is exactly zero: parallel or
/// coincident lines, or a degenerate zero-length segment. Near-parallel
/// pairs with a tiny nonzero determinant still yield a point, possibly far
/// outside any reasonable coordinate range; the voting stage is responsible
/// for tolerating such values.
pub fn line_intersection(a: &LineSegment, b: &LineSegment) -> Option<Point2d> {
    let (x0, y0) = (a.p0.x, a.p0.y);
    let (x1, y1) = (a.p1.x, a.p1.y);
    let (x2, y2) = (b.p0.x, b.p0.y);
    let (x3, y3) = (b.p1.x, b.p1.y);

    let d = (x0 - x1) * (y2 - y3) - (y0 - y1) * (x2 - x3);
    if d == 0.0 {
        return None;
    }
    let pa = x0 * y1 - y0 * x1;
    let pb = x2 * y3 - y2 * x3;
    let xi = ((x2 - x3) * pa - (x0 - x1) * pb) / d;
    let yi = ((y2 - y3) * pa - (y0 - y1) * pb) / d;
    Some(Point2d::new(xi, yi))
}

/// Collects intersection candidates over the segment list under the given
/// pairing strategy.
pub fn find_intersections(segments: &[LineSegment], strategy: PairingStrategy) -> Vec<Point2d> {
    let mut candidates = Vec::new();
    match strategy {
        PairingStrategy::DistinctPairs => {
            for (i, a) in segments.iter().enumerate() {
                for b in &segments[i + 1..] {
                    if let Some(p) = line_intersection(a, b) {
                        candidates.push(p);
                    }
                }
            }
        }
        PairingStrategy::DropFirst => {
            for a in segments {
                for b in segments.iter().skip(1) {
                    if a == b {
                        continue;
                    }
                    if let Some(p) = line_intersection(a, b) {
                        candidates.push(p);
                    }
                }
            }
        }
    }
    candidates
}
